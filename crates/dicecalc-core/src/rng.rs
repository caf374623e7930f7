//! Seeded die-rolling RNG for the Monte Carlo simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{DIE_FACES, TARGET_FACE};

/// Derive an independent stream seed from a base seed (SplitMix64 finaliser).
#[must_use]
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    let mut z = base
        .wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Random source for rolling dice.
pub struct DiceRng {
    inner: StdRng,
}

impl DiceRng {
    /// Reproducible generator for the given seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Seeded if `seed` is given, otherwise from entropy.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Roll one die, uniform over `1..=DIE_FACES`.
    #[inline]
    pub fn roll_die(&mut self) -> u32 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Roll `dice` dice and count how many show the target face.
    pub fn roll_and_count_targets(&mut self, dice: u32) -> u32 {
        let mut hits = 0;
        for _ in 0..dice {
            if self.roll_die() == TARGET_FACE {
                hits += 1;
            }
        }
        hits
    }
}
