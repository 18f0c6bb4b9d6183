use std::time::Duration;

use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

/// Side lengths shared by the mesh and sequence groups.
pub const SIDE_LENGTHS: [u32; 3] = [100, 500, 1000];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput in generated points; empty outputs still count as one element.
pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}
