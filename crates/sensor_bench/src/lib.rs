#![forbid(unsafe_code)]
//! sensor_bench: Synthetic point-of-interest and sensor layouts for benchmarking
//! sensor-placement algorithms.
//!
//! Modules:
//! - mesh: deterministic square, triangle and honeycomb lattices of candidate POIs
//! - sequence: random, Halton and clipped-Gaussian sensor position sequences
//! - registry: name-based, case-insensitive lookup of mesh and sequence generators
//! - generator: per-instance POI thinning and sensor generation, handed to a dataset sink
//!
//! Enable the `serde` feature to serialize [`point::Point`] and [`generator::PoiData`].
pub mod error;
pub mod generator;
pub mod mesh;
pub mod point;
pub mod registry;
pub mod sequence;

/// Convenient re-exports for common types. Import with `use sensor_bench::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::generator::{
        retain_points, ClockSeedSource, DatasetSink, GenerationConfig, GenerationSummary,
        Generator, PoiData, SeedSource, VecSink,
    };
    pub use crate::mesh::{HoneycombMesh, Mesh, MeshGenerator, SquareMesh, TriangleMesh};
    pub use crate::point::Point;
    pub use crate::registry::{GeneratorCategory, GeneratorRegistry, NamedRegistry};
    pub use crate::sequence::{
        halton_number, GaussianSequence, HaltonSequence, RandomSequence, Sequence,
        SequenceGenerator,
    };
}
