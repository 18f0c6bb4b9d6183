//! Uniform random sequence generator.
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::sequence::{clock_seed, rand01, sample_sequence, Sequence, SequenceGenerator};

/// Uniform i.i.d. random positions over a square region.
///
/// Generators built with the same seed produce identical sequences. [`RandomSequence::new`]
/// seeds from the wall clock and is therefore not reproducible across runs.
#[derive(Debug)]
pub struct RandomSequence {
    seed: u64,
    rng: StdRng,
}

impl RandomSequence {
    pub const NAME: &'static str = "random";

    /// Create a generator seeded from the current time.
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create a reproducible generator from an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for RandomSequence {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_sequence(&mut self, count: usize, side_length: u32) -> Sequence {
        sample_sequence(&mut self.rng, count, side_length, rand01)
    }
}
