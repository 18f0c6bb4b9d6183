#![forbid(unsafe_code)]
//! Command-line front end of `sensor_bench`: option parsing and validation, JSON output and
//! tracing setup.

pub mod options;
pub mod output;

use anyhow::Context;
use clap::CommandFactory;
use sensor_bench::generator::{GenerationSummary, Generator};
use sensor_bench::registry::GeneratorRegistry;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use options::{Options, ValidationError, ValidationIssue};
pub use output::JsonDirSink;

/// Installs a formatting subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Full usage text, printed after argument and validation errors.
pub fn usage() -> String {
    Options::command().render_help().to_string()
}

/// Validates `options` and writes every instance below the output directory.
///
/// Validation failures surface as a [`ValidationError`] inside the returned error.
pub fn run(options: &Options) -> anyhow::Result<GenerationSummary> {
    let registry = GeneratorRegistry::default();
    let config = options.validate(&registry)?;

    let root = options
        .output_root()
        .with_context(|| format!("resolving output directory {}", options.out_dir.display()))?;
    let mut sink = JsonDirSink::create(&root, &options.subdir_name())
        .with_context(|| format!("creating output directories below {}", root.display()))?;

    let mut generator = Generator::from_registry(
        config,
        &registry,
        &options.poi_mesh_type,
        &options.generator_type,
    )?;
    let summary = generator.generate(&mut sink)?;

    info!(
        "Wrote {} instances ({} POIs, {} sensors) below {}",
        summary.instances,
        summary.pois_written,
        summary.sensors_written,
        root.display()
    );
    Ok(summary)
}
