//! Implementation of Mersenne Twister MT19937 based on the 2002 reference code and Wikipedia pseudo-code:
//!
//! http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/MT2002/CODES/mt19937ar.c
//! https://en.wikipedia.org/wiki/Mersenne_Twister

use rand_core::{impls, RngCore, SeedableRng};

use super::entropy::words_from_le;
use super::{init, Error};

pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;
pub const R: u32 = 31;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 1_812_433_253;

pub const LOWER_MASK: u32 = (1 << R) - 1;
pub const UPPER_MASK: u32 = !LOWER_MASK;

// Selected by the low bit of the twisted word
const MAG01: [u32; 2] = [0, A];

/// MT19937 PRNG (32-bit)
///
/// `index` is the next state word to temper, any value `>= N` means a twist is due
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Create an MT19937 PRNG seeded from a single word
    pub fn new(seed: u32) -> Self {
        let mut rng = Self::unseeded();
        rng.reseed(seed);
        rng
    }

    /// Create an MT19937 PRNG seeded from an array of words
    ///
    /// errors: returns Error on an empty seed array
    pub fn from_slice(seed_words: &[u32]) -> Result<Self, Error> {
        let mut rng = Self::unseeded();
        rng.reseed_slice(seed_words)?;
        Ok(rng)
    }

    // Zeroed storage, only valid once one of the reseed functions runs
    pub(crate) fn unseeded() -> Self {
        Self {
            state: [0_u32; N],
            index: N,
        }
    }

    /// Re-initialize the state from a single word
    pub fn reseed(&mut self, seed: u32) {
        init::seed_with_scalar(&mut self.state, seed);
        self.index = N;
    }

    /// Re-initialize the state from an array of words
    ///
    /// errors: returns Error on an empty seed array, the generator is left unchanged
    pub fn reseed_slice(&mut self, seed_words: &[u32]) -> Result<(), Error> {
        init::seed_with_array(&mut self.state, seed_words)?;
        self.index = N;
        Ok(())
    }

    /// Extract a tempered value based on MT[index]
    /// calling twist() every n numbers
    pub fn extract_number(&mut self) -> u32 {
        if self.index >= N {
            twist(&mut self.state);
            self.index = 0;
        }

        let y = self.state[self.index];
        self.index += 1;

        temper(y)
    }

    /// Extract the next tempered value reinterpreted as a signed integer
    ///
    /// Words with the top bit set come out negative
    pub fn next_i32(&mut self) -> i32 {
        self.extract_number() as i32
    }

    /// Position of the next state word to temper
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the next draw twists the state first
    pub fn is_exhausted(&self) -> bool {
        self.index >= N
    }

    /// Raw (untempered) state words
    pub fn state(&self) -> &[u32; N] {
        &self.state
    }
}

impl core::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish()
    }
}

/// Apply the tempering transform to a raw state word
pub fn temper(mut y: u32) -> u32 {
    y ^= y >> U;
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^ (y >> L)
}

/// Regenerate every word of the state
///
/// Equivalent to `state[k] = state[(k + M) % N] ^ twisted(k, (k + 1) % N)` for each k,
/// split into ranges so no index needs wrapping
pub(crate) fn twist(state: &mut [u32; N]) {
    for k in 0..N - M {
        let y = (state[k] & UPPER_MASK) | (state[k + 1] & LOWER_MASK);
        state[k] = state[k + M] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
    }

    for k in N - M..N - 1 {
        let y = (state[k] & UPPER_MASK) | (state[k + 1] & LOWER_MASK);
        state[k] = state[k + M - N] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
    }

    let y = (state[N - 1] & UPPER_MASK) | (state[0] & LOWER_MASK);
    state[N - 1] = state[M - 1] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.extract_number()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    /// Four little-endian seed words, fed to array seeding
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self::unseeded();
        init::mix(&mut rng.state, &words_from_le(&seed));
        rng
    }
}
