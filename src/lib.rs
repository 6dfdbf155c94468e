#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod mersenne;

pub use mersenne::{create_with, next_value, Error, Mt19937, SeedOrigin, SeedSource, Seeded};

#[cfg(feature = "std")]
pub use mersenne::create_generator;
