//! Sensor sequence generators.
//!
//! A [`SequenceGenerator`] produces an ordered list of exactly `count` points inside a
//! square region. Generators may keep state between calls: the Halton generator advances
//! its index, the random variants advance their RNG. Each generator owns its state
//! exclusively and is not meant to be shared between threads while generating.
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::point::Point;

pub mod gaussian;
pub mod halton;
pub mod random;

pub use gaussian::GaussianSequence;
pub use halton::{halton_number, HaltonSequence};
pub use random::RandomSequence;

/// Ordered list of generated sensor positions.
pub type Sequence = Vec<Point>;

/// Trait for sensor sequence generation.
pub trait SequenceGenerator: Send {
    /// Name under which the generator is registered.
    fn name(&self) -> &'static str;

    /// Generates the next `count` points within `[0, side_length] x [0, side_length]`.
    fn create_sequence(&mut self, count: usize, side_length: u32) -> Sequence;
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    // 53 high bits fill the mantissa exactly.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Builds a sequence by drawing each coordinate independently.
///
/// `unit` maps the RNG to a value in `[0, 1]`; the result is scaled to the side length.
/// The x coordinate is always drawn before y.
pub(crate) fn sample_sequence<F>(
    rng: &mut dyn Rng,
    count: usize,
    side_length: u32,
    mut unit: F,
) -> Sequence
where
    F: FnMut(&mut dyn Rng) -> f64,
{
    let side = f64::from(side_length);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = unit(rng) * side;
        let y = unit(rng) * side;
        out.push(Point::new(x, y));
    }
    out
}

/// Milliseconds since the Unix epoch, used as the default seed of random generators.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
