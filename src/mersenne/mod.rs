pub mod entropy;
pub mod generator;
pub mod init;
pub mod mt19937;

pub use entropy::{Fallback, FixedSeed, SeedMaterial, SeedOrigin, SeedSource};
pub use generator::{create_with, next_value, Seeded};
pub use mt19937::Mt19937;

#[cfg(feature = "std")]
pub use entropy::{ClockSeed, DefaultSeed, OsSeed};
#[cfg(feature = "std")]
pub use generator::create_generator;

/// Errors for seeding and drawing from an MT19937 PRNG
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Array seeding was given no seed words
    EmptySeed,
    /// Range request with `end <= begin`
    InvalidRange,
    /// No seed source could supply seed material
    EntropyUnavailable,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Error::EmptySeed => write!(f, "seed array must hold at least one word"),
            Error::InvalidRange => write!(f, "range end must be greater than range begin"),
            Error::EntropyUnavailable => write!(f, "no seed source produced seed material"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
