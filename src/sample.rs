//! Deterministic sample provider.
//!
//! Produces the `1..=n` sequence and arranges it per the configured
//! shuffle mode. The RNG is a seeded PCG so a run can be replayed
//! exactly: the same seed yields the same sequence of samples across
//! runs and platforms.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::config::ShuffleMode;

/// Seeded source of sample sequences.
#[derive(Debug, Clone)]
pub struct SampleSource {
    seed: u64,
    rng: Pcg64,
}

impl SampleSource {
    /// Create a provider with the given master seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Get the master seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind the provider to its initial state.
    pub fn reset(&mut self) {
        self.rng = Pcg64::seed_from_u64(self.seed);
    }

    /// Produce a fresh sample of `size` elements arranged per `mode`.
    #[must_use]
    pub fn generate(&mut self, size: usize, mode: ShuffleMode) -> Vec<i32> {
        let mut values: Vec<i32> = (1..=size).map(|v| v as i32).collect();
        self.arrange(&mut values, mode);
        values
    }

    /// Re-arrange an existing sample in place per `mode`.
    pub fn arrange(&mut self, values: &mut [i32], mode: ShuffleMode) {
        match mode {
            ShuffleMode::Random => random_shuffle(values, &mut self.rng),
            ShuffleMode::NearlySorted => nearly_sorted(values, &mut self.rng),
            ShuffleMode::ReverseSorted => values.reverse(),
            ShuffleMode::Sorted => sorted(values),
        }
    }
}

/// Fisher-Yates shuffle over the whole slice.
fn random_shuffle<R: Rng>(values: &mut [i32], rng: &mut R) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

/// Shuffle only the first tenth of the slice.
fn nearly_sorted<R: Rng>(values: &mut [i32], rng: &mut R) {
    let prefix = values.len() / 10;
    random_shuffle(&mut values[..prefix], rng);
}

/// Refill with `1..=n` regardless of current content.
fn sorted(values: &mut [i32]) {
    for (i, value) in values.iter_mut().enumerate() {
        *value = (i + 1) as i32;
    }
}
