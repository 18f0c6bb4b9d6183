//! Clipped-Gaussian random sequence generator.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sequence::{clock_seed, rand01, sample_sequence, Sequence, SequenceGenerator};

/// Standard deviations kept on each side of the mean before remapping.
pub const CLIP_SIGMAS: f64 = 3.0;

/// Normally distributed positions concentrated around the center of a square region.
///
/// Each coordinate is a standard normal draw clipped to `[-CLIP_SIGMAS, CLIP_SIGMAS]` and
/// mapped affinely onto `[0, side_length]`. Seeding behaves as in
/// [`crate::sequence::RandomSequence`].
#[derive(Debug)]
pub struct GaussianSequence {
    seed: u64,
    rng: StdRng,
}

impl GaussianSequence {
    pub const NAME: &'static str = "gaussian";

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

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for GaussianSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for GaussianSequence {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_sequence(&mut self, count: usize, side_length: u32) -> Sequence {
        sample_sequence(&mut self.rng, count, side_length, clipped_gaussian01)
    }
}

/// Clipped standard normal draw remapped onto `[0, 1]`.
fn clipped_gaussian01(rng: &mut dyn Rng) -> f64 {
    let z = standard_normal(rng).clamp(-CLIP_SIGMAS, CLIP_SIGMAS);
    ((z + CLIP_SIGMAS) / (2.0 * CLIP_SIGMAS)).clamp(0.0, 1.0)
}

/// Box–Muller transform; one normal deviate per call.
fn standard_normal(rng: &mut dyn Rng) -> f64 {
    let u1 = (1.0 - rand01(rng)).clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rand01(rng);

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;

    r * theta.cos()
}
