//! Destinations for generated datasets.
//!
//! The [`crate::generator::Generator`] hands every finished record to a [`DatasetSink`],
//! keyed by its 1-based instance number. Serialization and file layout live behind this
//! trait; failures are propagated to the caller without rolling back records that were
//! already written.
use crate::error::Result;
use crate::generator::PoiData;
use crate::point::Point;

/// Receives POI and sensor records as they are generated.
pub trait DatasetSink {
    fn write_poi(&mut self, instance: u32, data: &PoiData) -> Result<()>;

    fn write_sensors(&mut self, instance: u32, sensors: &[Point]) -> Result<()>;
}

/// A sink that discards every record.
impl DatasetSink for () {
    #[inline]
    fn write_poi(&mut self, _instance: u32, _data: &PoiData) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn write_sensors(&mut self, _instance: u32, _sensors: &[Point]) -> Result<()> {
        Ok(())
    }
}

impl<S: DatasetSink + ?Sized> DatasetSink for &mut S {
    fn write_poi(&mut self, instance: u32, data: &PoiData) -> Result<()> {
        (**self).write_poi(instance, data)
    }

    fn write_sensors(&mut self, instance: u32, sensors: &[Point]) -> Result<()> {
        (**self).write_sensors(instance, sensors)
    }
}

/// A sink that keeps every record in memory.
#[derive(Debug, Default)]
pub struct VecSink {
    pois: Vec<(u32, PoiData)>,
    sensors: Vec<(u32, Vec<Point>)>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pois(&self) -> &[(u32, PoiData)] {
        &self.pois
    }

    pub fn sensors(&self) -> &[(u32, Vec<Point>)] {
        &self.sensors
    }

    pub fn into_inner(self) -> (Vec<(u32, PoiData)>, Vec<(u32, Vec<Point>)>) {
        (self.pois, self.sensors)
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty() && self.sensors.is_empty()
    }
}

impl DatasetSink for VecSink {
    fn write_poi(&mut self, instance: u32, data: &PoiData) -> Result<()> {
        self.pois.push((instance, data.clone()));
        Ok(())
    }

    fn write_sensors(&mut self, instance: u32, sensors: &[Point]) -> Result<()> {
        self.sensors.push((instance, sensors.to_vec()));
        Ok(())
    }
}
