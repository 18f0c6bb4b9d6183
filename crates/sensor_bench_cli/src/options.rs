//! Command-line options and their validation.
use std::path::{Component, Path, PathBuf};

use clap::Parser;
use sensor_bench::generator::GenerationConfig;
use sensor_bench::registry::{GeneratorCategory, GeneratorRegistry};

pub const MIN_INSTANCE_COUNT: i64 = 1;
pub const MAX_INSTANCE_COUNT: i64 = 100;
pub const MIN_SIDE_LENGTH: i64 = 1;
pub const MAX_SIDE_LENGTH: i64 = 1000;
pub const MIN_POI_DISTANCE_TO_SIDE_LENGTH: f64 = 0.001;
pub const MAX_POI_DISTANCE_TO_SIDE_LENGTH: f64 = 0.1;
pub const MIN_POI_EXCLUSION_CHANCE: i64 = 0;
pub const MAX_POI_EXCLUSION_CHANCE: i64 = 100;
pub const MIN_SENSOR_COUNT: i64 = 1;
pub const MAX_SENSOR_COUNT: i64 = 10_000;

/// Subdirectory of the output directory holding POI files.
pub const DIR_NAME_POI: &str = "poi";
/// Subdirectory of the output directory holding sensor files.
pub const DIR_NAME_SENSOR: &str = "sensor";

/// Generates POI and sensor datasets for sensor-placement benchmarks.
///
/// Integer options accept negative values so that range violations are reported together
/// with every other validation failure.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sensor-bench", version)]
pub struct Options {
    /// Number of instances to generate
    #[arg(short = 'i', long = "instanceCount", value_name = "INT", allow_negative_numbers = true)]
    pub instance_count: i64,

    /// Distance between mesh nodes
    #[arg(short = 'd', long = "poiDistance", value_name = "FLOAT", allow_negative_numbers = true)]
    pub poi_distance: f64,

    /// Chance, in percent, of excluding a mesh node from an instance
    #[arg(short = 'e', long = "poiExclusion", value_name = "INT", allow_negative_numbers = true)]
    pub poi_exclusion_chance: i64,

    /// Mesh holding the points of interest
    #[arg(short = 'm', long = "poiMeshType", value_name = "STRING")]
    pub poi_mesh_type: String,

    /// Number of sensors per instance
    #[arg(short = 's', long = "sensorCount", value_name = "INT", allow_negative_numbers = true)]
    pub sensor_count: i64,

    /// Sensor sequence generator
    #[arg(short = 'g', long = "generatorType", value_name = "STRING")]
    pub generator_type: String,

    /// Side length of the square region holding POIs and sensors
    #[arg(short = 'l', long = "sideLength", value_name = "INT", allow_negative_numbers = true)]
    pub side_length: i64,

    /// Directory to write results into
    #[arg(short = 'o', long = "outDir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Instance count must be between {min} and {max}, got {value}.")]
    InstanceCount { value: i64, min: i64, max: i64 },

    #[error("Side length must be between {min} and {max}, got {value}.")]
    SideLength { value: i64, min: i64, max: i64 },

    #[error(
        "POI distance must be between {min} and {max} (side length {side_length} times {min_ratio} to {max_ratio}), got {value}."
    )]
    PoiDistance {
        value: f64,
        min: f64,
        max: f64,
        side_length: i64,
        min_ratio: f64,
        max_ratio: f64,
    },

    #[error("POI exclusion chance must be between {min} and {max}, got {value}.")]
    PoiExclusionChance { value: i64, min: i64, max: i64 },

    #[error("Unknown POI mesh type '{value}', available: {known}.")]
    PoiMeshType { value: String, known: String },

    #[error("Sensor count must be between {min} and {max}, got {value}.")]
    SensorCount { value: i64, min: i64, max: i64 },

    #[error("Unknown sensor generator type '{value}', available: {known}.")]
    GeneratorType { value: String, known: String },

    #[error("Output directory '{value}' does not exist or is not a directory.")]
    OutDir { value: String },
}

/// Every rule an [`Options`] value broke, in option order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl Options {
    /// Checks every rule and converts the options into a [`GenerationConfig`].
    ///
    /// Generator names are checked against `registry`, ignoring case.
    pub fn validate(
        &self,
        registry: &GeneratorRegistry,
    ) -> Result<GenerationConfig, ValidationError> {
        let mut issues = Vec::new();

        let instance_count = in_range(self.instance_count, MIN_INSTANCE_COUNT, MAX_INSTANCE_COUNT);
        if instance_count.is_none() {
            issues.push(ValidationIssue::InstanceCount {
                value: self.instance_count,
                min: MIN_INSTANCE_COUNT,
                max: MAX_INSTANCE_COUNT,
            });
        }

        let side_length = in_range(self.side_length, MIN_SIDE_LENGTH, MAX_SIDE_LENGTH);
        if side_length.is_none() {
            issues.push(ValidationIssue::SideLength {
                value: self.side_length,
                min: MIN_SIDE_LENGTH,
                max: MAX_SIDE_LENGTH,
            });
        }

        let side = self.side_length as f64;
        let (min_distance, max_distance) = (
            MIN_POI_DISTANCE_TO_SIDE_LENGTH * side,
            MAX_POI_DISTANCE_TO_SIDE_LENGTH * side,
        );
        if !(min_distance..=max_distance).contains(&self.poi_distance) {
            issues.push(ValidationIssue::PoiDistance {
                value: self.poi_distance,
                min: min_distance,
                max: max_distance,
                side_length: self.side_length,
                min_ratio: MIN_POI_DISTANCE_TO_SIDE_LENGTH,
                max_ratio: MAX_POI_DISTANCE_TO_SIDE_LENGTH,
            });
        }

        let exclusion = in_range(
            self.poi_exclusion_chance,
            MIN_POI_EXCLUSION_CHANCE,
            MAX_POI_EXCLUSION_CHANCE,
        );
        if exclusion.is_none() {
            issues.push(ValidationIssue::PoiExclusionChance {
                value: self.poi_exclusion_chance,
                min: MIN_POI_EXCLUSION_CHANCE,
                max: MAX_POI_EXCLUSION_CHANCE,
            });
        }

        if !registry.contains(GeneratorCategory::Mesh, &self.poi_mesh_type) {
            issues.push(ValidationIssue::PoiMeshType {
                value: self.poi_mesh_type.clone(),
                known: registry.names(GeneratorCategory::Mesh).join(", "),
            });
        }

        let sensor_count = in_range(self.sensor_count, MIN_SENSOR_COUNT, MAX_SENSOR_COUNT);
        if sensor_count.is_none() {
            issues.push(ValidationIssue::SensorCount {
                value: self.sensor_count,
                min: MIN_SENSOR_COUNT,
                max: MAX_SENSOR_COUNT,
            });
        }

        if !registry.contains(GeneratorCategory::Sequence, &self.generator_type) {
            issues.push(ValidationIssue::GeneratorType {
                value: self.generator_type.clone(),
                known: registry.names(GeneratorCategory::Sequence).join(", "),
            });
        }

        if !self.out_dir.is_dir() {
            issues.push(ValidationIssue::OutDir {
                value: self.out_dir.display().to_string(),
            });
        }

        match (instance_count, side_length, exclusion, sensor_count) {
            (Some(instance_count), Some(side_length), Some(exclusion), Some(sensor_count))
                if issues.is_empty() =>
            {
                Ok(GenerationConfig::new(instance_count, side_length)
                    .with_poi_distance(self.poi_distance)
                    .with_poi_exclusion_chance(exclusion)
                    .with_sensor_count(sensor_count as usize))
            }
            _ => Err(ValidationError { issues }),
        }
    }

    /// Name of the per-run subdirectory: `<mesh>_<generator>_<side>`, lowercased.
    pub fn subdir_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.poi_mesh_type, self.generator_type, self.side_length
        )
        .to_lowercase()
    }

    /// Absolute form of the output directory with `.` and `..` components resolved lexically.
    pub fn output_root(&self) -> std::io::Result<PathBuf> {
        std::path::absolute(&self.out_dir).map(|path| normalize(&path))
    }
}

/// Drops `.` components and folds each `..` into its parent without touching the filesystem.
///
/// Expects an absolute path; `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn in_range(value: i64, min: i64, max: i64) -> Option<u32> {
    if (min..=max).contains(&value) {
        u32::try_from(value).ok()
    } else {
        None
    }
}
