//! Halton low-discrepancy sequence generator.
use crate::error::{Error, Result};
use crate::point::Point;
use crate::sequence::{Sequence, SequenceGenerator};

/// Halton sequence over a square region.
///
/// The n-th point is `(halton_number(n, 2), halton_number(n, 3)) * side_length`, with `n`
/// starting at 1, so the first point of a fresh generator is `(0.5, 1/3) * side_length`.
/// The index keeps advancing across calls: a second call continues the sequence rather
/// than repeating it. Fresh generators always start from the same index.
#[derive(Debug, Clone)]
pub struct HaltonSequence {
    /// Bases for the x and y coordinates. Defaults to `(2, 3)`.
    bases: (u32, u32),
    /// Index of the most recently generated point; 0 before the first one.
    counter: u64,
}

impl HaltonSequence {
    pub const NAME: &'static str = "halton";

    /// Construct a generator with bases (2, 3), positioned before index 1.
    pub fn new() -> Self {
        Self {
            bases: (2, 3),
            counter: 0,
        }
    }

    /// Construct with custom bases. Both must be at least 2.
    pub fn with_bases(bases: (u32, u32)) -> Result<Self> {
        if bases.0 < 2 || bases.1 < 2 {
            return Err(Error::InvalidParameter(format!(
                "Halton bases must be >= 2, got ({}, {})",
                bases.0, bases.1
            )));
        }
        Ok(Self { bases, counter: 0 })
    }

    /// Set the index of the next generated point (builder-style).
    pub fn with_start_index(mut self, start_index: u64) -> Self {
        self.counter = start_index.saturating_sub(1);
        self
    }

    pub fn bases(&self) -> (u32, u32) {
        self.bases
    }

    /// Index that the next generated point will use.
    pub fn next_index(&self) -> u64 {
        self.counter + 1
    }

    /// Generates the point at the next index and advances the counter.
    pub fn next_point(&mut self, side_length: u32) -> Point {
        self.counter += 1;
        let side = f64::from(side_length);
        Point::new(
            halton_number(self.counter, self.bases.0) * side,
            halton_number(self.counter, self.bases.1) * side,
        )
    }
}

impl Default for HaltonSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for HaltonSequence {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_sequence(&mut self, count: usize, side_length: u32) -> Sequence {
        (0..count).map(|_| self.next_point(side_length)).collect()
    }
}

/// Radical inverse of `index` in `base`: the base-`base` digits of `index` mirrored
/// around the radix point.
///
/// Returns a value in `[0, 1)`; index 0 maps to 0.
pub fn halton_number(mut index: u64, base: u32) -> f64 {
    debug_assert!(base >= 2);
    let b = u64::from(base);
    let mut result = 0.0;
    let mut factor = 1.0;

    while index > 0 {
        factor /= f64::from(base);
        result += factor * (index % b) as f64;
        index /= b;
    }

    result
}
