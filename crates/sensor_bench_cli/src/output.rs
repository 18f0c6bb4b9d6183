//! JSON files on disk as a dataset sink.
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use sensor_bench::error::Result;
use sensor_bench::generator::{DatasetSink, PoiData};
use sensor_bench::point::Point;
use serde::Serialize;
use tracing::info;

use crate::options::{DIR_NAME_POI, DIR_NAME_SENSOR};

/// Writes instance `i` to `<root>/poi/<subdir>/<i>.json` and `<root>/sensor/<subdir>/<i>.json`.
///
/// Existing files with the same name are overwritten.
#[derive(Debug, Clone)]
pub struct JsonDirSink {
    poi_dir: PathBuf,
    sensor_dir: PathBuf,
}

impl JsonDirSink {
    /// Creates both output directories, including missing parents.
    pub fn create(root: &Path, subdir: &str) -> io::Result<Self> {
        let poi_dir = root.join(DIR_NAME_POI).join(subdir);
        let sensor_dir = root.join(DIR_NAME_SENSOR).join(subdir);
        fs::create_dir_all(&poi_dir)?;
        fs::create_dir_all(&sensor_dir)?;
        Ok(Self {
            poi_dir,
            sensor_dir,
        })
    }

    pub fn poi_dir(&self) -> &Path {
        &self.poi_dir
    }

    pub fn sensor_dir(&self) -> &Path {
        &self.sensor_dir
    }
}

impl DatasetSink for JsonDirSink {
    fn write_poi(&mut self, instance: u32, data: &PoiData) -> Result<()> {
        let path = instance_path(&self.poi_dir, instance);
        write_json(&path, data)?;
        info!("Saved {}", path.display());
        Ok(())
    }

    fn write_sensors(&mut self, instance: u32, sensors: &[Point]) -> Result<()> {
        let path = instance_path(&self.sensor_dir, instance);
        write_json(&path, sensors)?;
        info!("Saved {}", path.display());
        Ok(())
    }
}

fn instance_path(dir: &Path, instance: u32) -> PathBuf {
    dir.join(format!("{instance}.json"))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value).map_err(io::Error::from)?;
    writer.flush()
}
