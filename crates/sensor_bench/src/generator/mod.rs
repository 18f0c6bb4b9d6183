//! Generation of POI and sensor datasets across numbered instances.
//!
//! A [`Generator`] pairs a [`MeshGenerator`] with a [`SequenceGenerator`] and a
//! [`GenerationConfig`]. The POI lattice is built once per run; every instance then draws a
//! fresh seed, thins the lattice with it, and hands a [`PoiData`] record to a
//! [`DatasetSink`]. Sensor instances come from a separate pass over the sequence generator.
//! The two passes never share data.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::mesh::{check_distance, MeshGenerator};
use crate::point::Point;
use crate::registry::GeneratorRegistry;
use crate::sequence::{rand01, SequenceGenerator};

pub mod seed;
pub mod sink;

pub use seed::{ClockSeedSource, SeedSource};
pub use sink::{DatasetSink, VecSink};

/// Numeric parameters of a generation run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Number of POI and sensor instances, numbered from 1.
    pub instance_count: u32,
    /// Side length of the square region holding POIs and sensors.
    pub side_length: u32,
    /// Nominal spacing between lattice nodes.
    pub poi_distance: f64,
    /// Chance, in percent, that a lattice node is dropped from an instance.
    pub poi_exclusion_chance: u32,
    /// Number of sensors per instance.
    pub sensor_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            instance_count: 1,
            side_length: 100,
            poi_distance: 1.0,
            poi_exclusion_chance: 0,
            sensor_count: 100,
        }
    }
}

impl GenerationConfig {
    /// Creates a new [`GenerationConfig`] for `instance_count` instances over a square of
    /// `side_length`.
    pub fn new(instance_count: u32, side_length: u32) -> Self {
        Self {
            instance_count,
            side_length,
            ..Default::default()
        }
    }

    /// Sets the lattice spacing.
    pub fn with_poi_distance(mut self, poi_distance: f64) -> Self {
        self.poi_distance = poi_distance;
        self
    }

    /// Sets the exclusion chance in percent.
    pub fn with_poi_exclusion_chance(mut self, poi_exclusion_chance: u32) -> Self {
        self.poi_exclusion_chance = poi_exclusion_chance;
        self
    }

    /// Sets the number of sensors per instance.
    pub fn with_sensor_count(mut self, sensor_count: usize) -> Self {
        self.sensor_count = sensor_count;
        self
    }

    /// Probability that a lattice node is kept.
    pub fn density(&self) -> f64 {
        1.0 - f64::from(self.poi_exclusion_chance) / 100.0
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.instance_count == 0 {
            return Err(Error::InvalidParameter(
                "instance_count must be >= 1".into(),
            ));
        }
        check_distance(self.poi_distance, self.side_length)?;
        if self.poi_exclusion_chance > 100 {
            return Err(Error::InvalidParameter(format!(
                "poi_exclusion_chance must be within 0..=100, got {}",
                self.poi_exclusion_chance
            )));
        }

        Ok(())
    }
}

/// One POI instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PoiData {
    /// Registry name of the mesh generator that built the lattice.
    pub name: String,
    /// Seed of the exclusion draw; reseeding `StdRng` with it reproduces `pois`.
    pub seed: u64,
    /// Retention probability of each lattice node.
    pub density: f64,
    pub x_range: u32,
    pub y_range: u32,
    /// Lattice nodes kept in this instance, in lattice order.
    pub pois: Vec<Point>,
    /// Nominal lattice spacing.
    pub range: f64,
}

/// Counts reported by a completed [`Generator::generate`] call.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Instances written per pass.
    pub instances: u32,
    /// Size of the un-thinned lattice.
    pub mesh_points: usize,
    /// POIs kept across all instances.
    pub pois_written: usize,
    /// Sensors generated across all instances.
    pub sensors_written: usize,
}

/// Keeps each point with probability `density`, one uniform draw per point in order.
pub fn retain_points(mesh: &[Point], density: f64, rng: &mut dyn Rng) -> Vec<Point> {
    mesh.iter()
        .copied()
        .filter(|_| rand01(rng) < density)
        .collect()
}

pub struct Generator {
    /// Run configuration applied to both passes.
    pub config: GenerationConfig,
    mesh_generator: Box<dyn MeshGenerator>,
    sequence_generator: Box<dyn SequenceGenerator>,
    seeds: Box<dyn SeedSource>,
}

impl Generator {
    /// Creates a generator after validating `config`. Exclusion seeds come from the clock.
    pub fn try_new(
        config: GenerationConfig,
        mesh_generator: Box<dyn MeshGenerator>,
        sequence_generator: Box<dyn SequenceGenerator>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            mesh_generator,
            sequence_generator,
            seeds: Box::new(ClockSeedSource::new()),
        })
    }

    /// Resolves both generators by name and validates `config`.
    pub fn from_registry(
        config: GenerationConfig,
        registry: &GeneratorRegistry,
        mesh_name: &str,
        sequence_name: &str,
    ) -> Result<Self> {
        let mesh_generator = registry.resolve_mesh(mesh_name)?;
        let sequence_generator = registry.resolve_sequence(sequence_name)?;
        Self::try_new(config, mesh_generator, sequence_generator)
    }

    /// Replaces the source of per-instance exclusion seeds (builder-style).
    pub fn with_seed_source(mut self, seeds: impl SeedSource + 'static) -> Self {
        self.seeds = Box::new(seeds);
        self
    }

    pub fn mesh_generator(&self) -> &dyn MeshGenerator {
        self.mesh_generator.as_ref()
    }

    pub fn sequence_generator(&self) -> &dyn SequenceGenerator {
        self.sequence_generator.as_ref()
    }

    /// Runs the POI pass followed by the sensor pass.
    ///
    /// Stops at the first failure; records handed to `sink` before it stay written.
    pub fn generate(&mut self, sink: &mut dyn DatasetSink) -> Result<GenerationSummary> {
        info!("Generator started.");
        let (mesh_points, pois_written) = self.generate_poi_data(sink)?;
        let sensors_written = self.generate_sensor_data(sink)?;
        info!("Generator finished.");

        Ok(GenerationSummary {
            instances: self.config.instance_count,
            mesh_points,
            pois_written,
            sensors_written,
        })
    }

    /// Builds the lattice once and writes one thinned copy per instance.
    ///
    /// Returns the lattice size and the number of POIs written in total.
    pub fn generate_poi_data(&mut self, sink: &mut dyn DatasetSink) -> Result<(usize, usize)> {
        let config = &self.config;
        let name = self.mesh_generator.name();
        let density = config.density();
        let mesh = self
            .mesh_generator
            .create_mesh(config.poi_distance, config.side_length)?;

        info!(
            "Generating POI data with params: side length = {}, instance count = {}, distance = {}, density = {}, mesh type = {}",
            config.side_length, config.instance_count, config.poi_distance, density, name
        );
        if mesh.is_empty() {
            warn!("Mesh '{}' produced no points; POI instances will be empty.", name);
        }

        let mut written = 0;
        for instance in 1..=config.instance_count {
            let seed = self.seeds.next_seed();
            let mut rng = StdRng::seed_from_u64(seed);
            let pois = retain_points(&mesh, density, &mut rng);
            debug!(
                "POI instance {}: seed = {}, kept {} of {} points",
                instance,
                seed,
                pois.len(),
                mesh.len()
            );
            written += pois.len();

            let data = PoiData {
                name: name.to_owned(),
                seed,
                density,
                x_range: config.side_length,
                y_range: config.side_length,
                pois,
                range: config.poi_distance,
            };
            sink.write_poi(instance, &data)?;
        }

        Ok((mesh.len(), written))
    }

    /// Writes one freshly generated sensor sequence per instance.
    ///
    /// Returns the number of sensors written in total.
    pub fn generate_sensor_data(&mut self, sink: &mut dyn DatasetSink) -> Result<usize> {
        let config = &self.config;
        info!(
            "Generating sensor data with params: side length = {}, instance count = {}, sensor count = {}, generator type = {}",
            config.side_length,
            config.instance_count,
            config.sensor_count,
            self.sequence_generator.name()
        );

        let mut written = 0;
        for instance in 1..=config.instance_count {
            let sensors = self
                .sequence_generator
                .create_sequence(config.sensor_count, config.side_length);
            debug!("Sensor instance {}: {} points", instance, sensors.len());
            written += sensors.len();
            sink.write_sensors(instance, &sensors)?;
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::mesh::{Mesh, SquareMesh};
    use crate::sequence::{HaltonSequence, RandomSequence, Sequence};

    struct CountingMesh {
        calls: Arc<AtomicUsize>,
    }

    impl MeshGenerator for CountingMesh {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn create_mesh(&self, distance: f64, side_length: u32) -> Result<Mesh> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            SquareMesh.create_mesh(distance, side_length)
        }
    }

    struct CountingSequence {
        calls: Arc<AtomicUsize>,
        inner: HaltonSequence,
    }

    impl SequenceGenerator for CountingSequence {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn create_sequence(&mut self, count: usize, side_length: u32) -> Sequence {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.create_sequence(count, side_length)
        }
    }

    struct FailingSink {
        inner: VecSink,
        fail_at: u32,
    }

    impl DatasetSink for FailingSink {
        fn write_poi(&mut self, instance: u32, data: &PoiData) -> Result<()> {
            if instance == self.fail_at {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.write_poi(instance, data)
        }

        fn write_sensors(&mut self, instance: u32, sensors: &[Point]) -> Result<()> {
            self.inner.write_sensors(instance, sensors)
        }
    }

    fn counter_seeds() -> impl FnMut() -> u64 {
        let mut n = 1_000;
        move || {
            n += 1;
            n
        }
    }

    fn config() -> GenerationConfig {
        GenerationConfig::new(10, 25)
            .with_poi_distance(2.0)
            .with_poi_exclusion_chance(20)
            .with_sensor_count(100)
    }

    #[test]
    fn config_density_and_validation() {
        let cfg = config();
        assert!((cfg.density() - 0.8).abs() < 1e-12);
        assert!(cfg.validate().is_ok());

        assert!(GenerationConfig::new(0, 25).validate().is_err());
        assert!(config().with_poi_distance(0.0).validate().is_err());
        assert!(config().with_poi_distance(f64::NAN).validate().is_err());
        assert!(config().with_poi_exclusion_chance(101).validate().is_err());
        assert!(matches!(
            config().with_poi_distance(1e-17).validate(),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(config().with_poi_exclusion_chance(100).density(), 0.0);
        assert_eq!(config().with_poi_exclusion_chance(0).density(), 1.0);
    }

    #[test]
    fn retain_points_honours_extreme_densities() {
        let mesh = SquareMesh.create_mesh(1.0, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(retain_points(&mesh, 1.0, &mut rng), mesh);
        assert!(retain_points(&mesh, 0.0, &mut rng).is_empty());
    }

    #[test]
    fn retain_points_is_reproducible_from_seed() {
        let mesh = SquareMesh.create_mesh(1.0, 40).unwrap();
        let a = retain_points(&mesh, 0.5, &mut StdRng::seed_from_u64(11));
        let b = retain_points(&mesh, 0.5, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);

        let share = a.len() as f64 / mesh.len() as f64;
        assert!((0.4..0.6).contains(&share), "share = {share}");
        // Kept points preserve lattice order.
        assert!(a.iter().all(|p| mesh.contains(p)));
    }

    #[test]
    fn poi_records_carry_run_parameters() {
        let mut generator =
            Generator::try_new(config(), Box::new(SquareMesh), Box::new(HaltonSequence::new()))
                .unwrap()
                .with_seed_source(counter_seeds());
        let mut sink = VecSink::new();
        let (mesh_points, _) = generator.generate_poi_data(&mut sink).unwrap();
        assert_eq!(mesh_points, 13 * 13);

        let instances: Vec<u32> = sink.pois().iter().map(|(i, _)| *i).collect();
        assert_eq!(instances, (1..=10).collect::<Vec<_>>());

        for (i, data) in sink.pois() {
            assert_eq!(data.name, "square");
            assert_eq!(data.seed, 1_000 + u64::from(*i));
            assert!((data.density - 0.8).abs() < 1e-12);
            assert_eq!(data.x_range, 25);
            assert_eq!(data.y_range, 25);
            assert_eq!(data.range, 2.0);
        }
        assert!(sink.sensors().is_empty());
    }

    #[test]
    fn recorded_seed_reproduces_the_instance() {
        let cfg = config();
        let mut generator =
            Generator::try_new(cfg.clone(), Box::new(SquareMesh), Box::new(HaltonSequence::new()))
                .unwrap();
        let mut sink = VecSink::new();
        generator.generate_poi_data(&mut sink).unwrap();

        let mesh = SquareMesh.create_mesh(cfg.poi_distance, cfg.side_length).unwrap();
        for (_, data) in sink.pois() {
            let replay = retain_points(&mesh, data.density, &mut StdRng::seed_from_u64(data.seed));
            assert_eq!(replay, data.pois);
        }

        let seeds: Vec<u64> = sink.pois().iter().map(|(_, d)| d.seed).collect();
        assert!(seeds.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn mesh_is_built_once_per_run() {
        let mesh_calls = Arc::new(AtomicUsize::new(0));
        let seq_calls = Arc::new(AtomicUsize::new(0));
        let mut generator = Generator::try_new(
            config(),
            Box::new(CountingMesh {
                calls: mesh_calls.clone(),
            }),
            Box::new(CountingSequence {
                calls: seq_calls.clone(),
                inner: HaltonSequence::new(),
            }),
        )
        .unwrap();

        let summary = generator.generate(&mut ()).unwrap();
        assert_eq!(mesh_calls.load(Ordering::SeqCst), 1);
        assert_eq!(seq_calls.load(Ordering::SeqCst), 10);
        assert_eq!(summary.instances, 10);
        assert_eq!(summary.sensors_written, 1_000);
    }

    #[test]
    fn sensor_instances_continue_the_sequence() {
        let mut generator = Generator::try_new(
            config().with_sensor_count(5),
            Box::new(SquareMesh),
            Box::new(HaltonSequence::new()),
        )
        .unwrap();
        let mut sink = VecSink::new();
        let written = generator.generate_sensor_data(&mut sink).unwrap();
        assert_eq!(written, 50);

        let expected = HaltonSequence::new().create_sequence(50, 25);
        let produced: Vec<Point> = sink
            .sensors()
            .iter()
            .flat_map(|(_, s)| s.iter().copied())
            .collect();
        assert_eq!(produced, expected);
        assert!(sink.pois().is_empty());
    }

    #[test]
    fn full_exclusion_writes_empty_instances() {
        let mut generator = Generator::try_new(
            config().with_poi_exclusion_chance(100),
            Box::new(SquareMesh),
            Box::new(RandomSequence::with_seed(1)),
        )
        .unwrap();
        let mut sink = VecSink::new();
        let summary = generator.generate(&mut sink).unwrap();
        assert_eq!(summary.pois_written, 0);
        assert!(sink.pois().iter().all(|(_, d)| d.pois.is_empty()));
        assert_eq!(sink.sensors().len(), 10);
    }

    #[test]
    fn no_exclusion_writes_the_full_mesh() {
        let mut generator = Generator::try_new(
            config().with_poi_exclusion_chance(0),
            Box::new(SquareMesh),
            Box::new(RandomSequence::with_seed(1)),
        )
        .unwrap();
        let mut sink = VecSink::new();
        generator.generate_poi_data(&mut sink).unwrap();
        let mesh = SquareMesh.create_mesh(2.0, 25).unwrap();
        assert!(sink.pois().iter().all(|(_, d)| d.pois == mesh));
    }

    #[test]
    fn sink_failure_stops_the_run_and_keeps_earlier_records() {
        let mut generator =
            Generator::try_new(config(), Box::new(SquareMesh), Box::new(HaltonSequence::new()))
                .unwrap();
        let mut sink = FailingSink {
            inner: VecSink::new(),
            fail_at: 3,
        };
        let err = generator.generate(&mut sink).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(sink.inner.pois().len(), 2);
        assert!(sink.inner.sensors().is_empty());
    }

    #[test]
    fn from_registry_resolves_by_name() {
        let registry = GeneratorRegistry::default();
        let generator =
            Generator::from_registry(config(), &registry, "Honeycomb", "HALTON").unwrap();
        assert_eq!(generator.mesh_generator().name(), "honeycomb");
        assert_eq!(generator.sequence_generator().name(), "halton");

        assert!(matches!(
            Generator::from_registry(config(), &registry, "hexagon", "halton"),
            Err(Error::UnknownGenerator { .. })
        ));
        assert!(matches!(
            Generator::from_registry(GenerationConfig::new(0, 10), &registry, "square", "random"),
            Err(Error::InvalidParameter(_))
        ));
    }
}
