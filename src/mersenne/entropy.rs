//! Seed material for automatically seeded generators
//!
//! A `SeedSource` is consulted exactly once, when a generator is created. The generator
//! itself never reads a source again.

use super::Error;

/// Number of seed words supplied by a seed source
pub const SEED_WORDS: usize = 4;

/// Where a generator's seed material came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOrigin {
    /// Operating system entropy
    Os,
    /// Wall-clock time mixed with process identifiers
    Clock,
    /// Caller-supplied words
    Fixed,
}

/// Seed words together with their origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedMaterial {
    pub words: [u32; SEED_WORDS],
    pub origin: SeedOrigin,
}

/// Capability to supply seed material for array seeding
pub trait SeedSource {
    fn seed_material(&mut self) -> Result<SeedMaterial, Error>;
}

/// Seed source returning the same caller-supplied words every time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub [u32; SEED_WORDS]);

impl SeedSource for FixedSeed {
    fn seed_material(&mut self) -> Result<SeedMaterial, Error> {
        Ok(SeedMaterial {
            words: self.0,
            origin: SeedOrigin::Fixed,
        })
    }
}

/// Seed source reading from the operating system's entropy source
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSeed;

#[cfg(feature = "std")]
impl SeedSource for OsSeed {
    fn seed_material(&mut self) -> Result<SeedMaterial, Error> {
        use rand::rngs::OsRng;
        use rand::RngCore;

        let mut bytes = [0_u8; SEED_WORDS * 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| Error::EntropyUnavailable)?;

        Ok(SeedMaterial {
            words: words_from_le(&bytes),
            origin: SeedOrigin::Os,
        })
    }
}

/// Seed source mixing wall-clock time with the process and parent process ids
///
/// Words are `[unix seconds, subsecond nanoseconds, pid, parent pid]`, the parent pid
/// is zero on non-unix platforms
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockSeed;

#[cfg(feature = "std")]
impl SeedSource for ClockSeed {
    fn seed_material(&mut self) -> Result<SeedMaterial, Error> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| Error::EntropyUnavailable)?;

        Ok(SeedMaterial {
            words: [
                now.as_secs() as u32,
                now.subsec_nanos(),
                std::process::id(),
                parent_id(),
            ],
            origin: SeedOrigin::Clock,
        })
    }
}

#[cfg(all(feature = "std", unix))]
fn parent_id() -> u32 {
    std::os::unix::process::parent_id()
}

#[cfg(all(feature = "std", not(unix)))]
fn parent_id() -> u32 {
    0
}

/// Seed source trying `primary` first, then `secondary` if it fails
#[derive(Clone, Copy, Debug, Default)]
pub struct Fallback<P, S> {
    pub primary: P,
    pub secondary: S,
}

impl<P: SeedSource, S: SeedSource> SeedSource for Fallback<P, S> {
    fn seed_material(&mut self) -> Result<SeedMaterial, Error> {
        match self.primary.seed_material() {
            Ok(material) => Ok(material),
            Err(_) => self.secondary.seed_material(),
        }
    }
}

/// OS entropy, falling back to the clock when the OS source fails
#[cfg(feature = "std")]
pub type DefaultSeed = Fallback<OsSeed, ClockSeed>;

/// Read 16 bytes as four little-endian words
pub(crate) fn words_from_le(bytes: &[u8; SEED_WORDS * 4]) -> [u32; SEED_WORDS] {
    let mut words = [0_u32; SEED_WORDS];

    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    words
}
