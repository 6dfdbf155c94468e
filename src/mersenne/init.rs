//! State initialization for MT19937
//!
//! Seeding follows the 2002 reference algorithm (`init_genrand` and `init_by_array`):
//!
//! http://www.math.sci.hiroshima-u.ac.jp/~m-mat/MT/MT2002/emt19937ar.html

use super::mt19937::{F, N, UPPER_MASK, W};
use super::Error;

/// Scalar seed used before mixing in a seed array
pub const ARRAY_SEED: u32 = 19_650_218;

// Multiplier for the first array mixing pass
const MIX_A: u32 = 1_664_525;
// Multiplier for the second array mixing pass
const MIX_B: u32 = 1_566_083_941;

/// Fill the full state from a single 32-bit seed
///
/// Any seed value is valid, including zero
pub fn seed_with_scalar(state: &mut [u32; N], seed: u32) {
    state[0] = seed;

    for i in 1..N {
        k_distribute(state, i);
    }
}

/// Fill the full state from an array of seed words
///
/// The array may be shorter or longer than the state, seed words are consumed cyclically
///
/// errors: returns Error on an empty seed array, leaving the state untouched
pub fn seed_with_array(state: &mut [u32; N], seed_words: &[u32]) -> Result<(), Error> {
    if seed_words.is_empty() {
        return Err(Error::EmptySeed);
    }

    mix(state, seed_words);

    Ok(())
}

// xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
fn k_distribute(state: &mut [u32; N], i: usize) {
    let prev = state[i - 1];
    state[i] = F.wrapping_mul(prev ^ (prev >> (W - 2))).wrapping_add(i as u32);
}

// Caller guarantees `seed_words` is non-empty
pub(crate) fn mix(state: &mut [u32; N], seed_words: &[u32]) {
    let len = seed_words.len();

    seed_with_scalar(state, ARRAY_SEED);

    let mut i = 1;
    let mut j = 0;

    for _ in 0..core::cmp::max(N, len) {
        let prev = state[i - 1];
        state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(MIX_A))
            .wrapping_add(seed_words[j])
            .wrapping_add(j as u32);

        i += 1;
        j += 1;

        if i >= N {
            state[0] = state[N - 1];
            i = 1;
        }

        if j >= len {
            j = 0;
        }
    }

    for _ in 0..N - 1 {
        let prev = state[i - 1];
        state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(MIX_B)).wrapping_sub(i as u32);

        i += 1;

        if i >= N {
            state[0] = state[N - 1];
            i = 1;
        }
    }

    // MSB is set, so the state is never all zeros
    state[0] = UPPER_MASK;
}
