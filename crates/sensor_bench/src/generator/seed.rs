//! Per-instance seed sources for POI exclusion.
use crate::sequence::clock_seed;

/// Supplies one seed per POI instance.
pub trait SeedSource {
    fn next_seed(&mut self) -> u64;
}

/// Wall-clock milliseconds, bumped past the previous value when the clock has not advanced.
///
/// Instances generated within the same millisecond still get distinct seeds.
#[derive(Debug, Clone, Default)]
pub struct ClockSeedSource {
    last: Option<u64>,
}

impl ClockSeedSource {
    pub fn new() -> Self {
        Self { last: None }
    }

    fn advance(&mut self, now: u64) -> u64 {
        let seed = match self.last {
            Some(last) if now <= last => last.wrapping_add(1),
            _ => now,
        };
        self.last = Some(seed);
        seed
    }
}

impl SeedSource for ClockSeedSource {
    fn next_seed(&mut self) -> u64 {
        self.advance(clock_seed())
    }
}

impl<F> SeedSource for F
where
    F: FnMut() -> u64,
{
    fn next_seed(&mut self) -> u64 {
        self()
    }
}
