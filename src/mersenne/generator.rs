use alloc::boxed::Box;
use core::ops::{Deref, DerefMut};

use super::entropy::{SeedOrigin, SeedSource};
use super::mt19937::Mt19937;
use super::Error;

// 2^-32, maps a 32-bit word onto [0, 1)
const DOUBLE_TRANSFORM: f64 = 2.3283064365386962890625e-10;

/// Heap-allocated generator seeded from a seed source
#[derive(Clone, Debug)]
pub struct Seeded {
    rng: Box<Mt19937>,
    origin: SeedOrigin,
}

impl Seeded {
    /// Where the generator's seed material came from
    pub fn origin(&self) -> SeedOrigin {
        self.origin
    }

    pub fn into_inner(self) -> Box<Mt19937> {
        self.rng
    }
}

impl Deref for Seeded {
    type Target = Mt19937;

    fn deref(&self) -> &Mt19937 {
        &self.rng
    }
}

impl DerefMut for Seeded {
    fn deref_mut(&mut self) -> &mut Mt19937 {
        &mut self.rng
    }
}

/// Create a generator array-seeded from OS entropy, or the clock if OS entropy fails
#[cfg(feature = "std")]
pub fn create_generator() -> Result<Seeded, Error> {
    create_with(&mut super::entropy::DefaultSeed::default())
}

/// Create a generator array-seeded from the given source
///
/// The source is consulted once
pub fn create_with<S: SeedSource + ?Sized>(source: &mut S) -> Result<Seeded, Error> {
    let material = source.seed_material()?;

    let mut rng = Box::new(Mt19937::unseeded());
    rng.reseed_slice(&material.words)?;

    Ok(Seeded {
        rng,
        origin: material.origin,
    })
}

/// Draw the next value, optionally restricted to `[begin, end)`
///
/// Without bounds this is the raw tempered word reinterpreted as signed
///
/// errors: returns Error if `end <= begin`
pub fn next_value(rng: &mut Mt19937, bounds: Option<(i32, i32)>) -> Result<i32, Error> {
    match bounds {
        Some((begin, end)) => rng.range_i32(begin, end),
        None => Ok(rng.next_i32()),
    }
}

impl Mt19937 {
    /// Draw a value uniformly distributed over `[begin, end)`
    ///
    /// errors: returns Error if `end <= begin`
    pub fn range_i32(&mut self, begin: i32, end: i32) -> Result<i32, Error> {
        if end <= begin {
            return Err(Error::InvalidRange);
        }

        let span = (i64::from(end) - i64::from(begin)) as u32;

        // reject the top partial bucket to avoid modulo bias
        let zone = (u32::MAX / span) * span;

        loop {
            let word = self.extract_number();
            if word < zone {
                return Ok((i64::from(begin) + i64::from(word % span)) as i32);
            }
        }
    }

    /// Draw a float in `[0, 1)` with 32 bits of resolution
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.extract_number()) * DOUBLE_TRANSFORM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mersenne::entropy::{FixedSeed, SeedMaterial};

    struct Counting {
        calls: usize,
    }

    impl SeedSource for Counting {
        fn seed_material(&mut self) -> Result<SeedMaterial, Error> {
            self.calls += 1;
            FixedSeed([0x123, 0x234, 0x345, 0x456]).seed_material()
        }
    }

    struct Unavailable;

    impl SeedSource for Unavailable {
        fn seed_material(&mut self) -> Result<SeedMaterial, Error> {
            Err(Error::EntropyUnavailable)
        }
    }

    #[test]
    fn check_create_with() {
        let mut source = Counting { calls: 0 };
        let mut rng = create_with(&mut source).unwrap();

        assert_eq!(rng.origin(), SeedOrigin::Fixed);
        assert!(rng.is_exhausted());

        for _i in 0..2000 {
            rng.extract_number();
        }

        assert_eq!(source.calls, 1);

        let mut expected = Mt19937::from_slice(&[0x123, 0x234, 0x345, 0x456]).unwrap();
        let mut inner = create_with(&mut source).unwrap().into_inner();
        for _i in 0..10 {
            assert_eq!(inner.extract_number(), expected.extract_number());
        }
    }

    #[test]
    fn check_create_unavailable() {
        assert_eq!(
            create_with(&mut Unavailable).map(|s| s.origin()),
            Err(Error::EntropyUnavailable)
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn check_create_generator() {
        let mut a = create_generator().unwrap();
        let mut b = Mt19937::from_slice(&[1]).unwrap();

        assert!(a.is_exhausted());
        // separately seeded generators diverge
        let same = (0..8).all(|_| a.extract_number() == b.extract_number());
        assert!(!same);
    }

    #[test]
    fn check_range() {
        let mut rng = Mt19937::new(5489);

        for _i in 0..10_000 {
            let v = rng.range_i32(-3, 7).unwrap();
            assert!(v >= -3 && v < 7);
        }

        for _i in 0..1000 {
            assert_eq!(rng.range_i32(11, 12).unwrap(), 11);
        }

        for _i in 0..1000 {
            let v = rng.range_i32(i32::MIN, i32::MAX).unwrap();
            assert!(v < i32::MAX);
        }
    }

    #[test]
    fn check_range_hits_every_value() {
        let mut rng = Mt19937::new(4357);
        let mut seen = [false; 6];

        for _i in 0..1000 {
            seen[rng.range_i32(0, 6).unwrap() as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn check_invalid_range() {
        let mut rng = Mt19937::new(5489);

        assert_eq!(rng.range_i32(5, 5), Err(Error::InvalidRange));
        assert_eq!(rng.range_i32(5, -5), Err(Error::InvalidRange));
        assert_eq!(next_value(&mut rng, Some((0, 0))), Err(Error::InvalidRange));

        // rejected requests draw nothing
        assert_eq!(rng.extract_number(), 3499211612);
    }

    #[test]
    fn check_next_value() {
        let mut rng = Mt19937::new(4357);

        assert_eq!(next_value(&mut rng, None), Ok(-1109180));
        assert_eq!(next_value(&mut rng, None), Ok(699692587));

        let v = next_value(&mut rng, Some((100, 200))).unwrap();
        assert!(v >= 100 && v < 200);
    }

    #[test]
    fn check_next_f64() {
        let mut rng = Mt19937::new(5489);

        assert_eq!(rng.next_f64(), 3499211612.0 * DOUBLE_TRANSFORM);

        for _i in 0..10_000 {
            let f = rng.next_f64();
            assert!(f >= 0.0 && f < 1.0);
        }
    }
}
