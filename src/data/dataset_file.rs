use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{PERSISTENCE, dataset_filename};
use crate::data::{Dataset, LoadDataset};

/// Prepared dataset written once by `make_dataset` and read on every start.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatasetFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub dataset: Dataset,
}

impl DatasetFile {
    pub fn new(dataset: Dataset, version: f64) -> Self {
        Self {
            version,
            timestamp_ms: Utc::now().timestamp_millis(),
            dataset,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open dataset file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let dataset_file = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize dataset: {:?}", path))?;
        Ok(dataset_file)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize dataset to: {}", path.display()))
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(PERSISTENCE.dataset.directory).join(dataset_filename())
    }
}

/// Reads a `DatasetFile` and refuses any other format version.
pub struct DatasetFileSource {
    pub path: PathBuf,
    pub version_required: f64,
}

impl DatasetFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            version_required: PERSISTENCE.dataset.version,
        }
    }
}

impl LoadDataset for DatasetFileSource {
    fn signature(&self) -> &'static str {
        "Dataset file"
    }

    fn load_dataset(&self) -> Result<Dataset> {
        #[cfg(debug_assertions)]
        let start_time = DEBUG_FLAGS.print_serde.then(|| {
            log::info!("Reading dataset from: {:?}...", self.path);
            std::time::Instant::now()
        });

        let dataset_file = DatasetFile::load_from_path(&self.path)?;

        if dataset_file.version != self.version_required {
            bail!(
                "Dataset version mismatch: file v{} vs required v{}",
                dataset_file.version,
                self.version_required
            );
        }

        #[cfg(debug_assertions)]
        if let Some(start) = start_time {
            log::info!(
                "✅ Dataset loaded: {} records in {:.2}s",
                dataset_file.dataset.records.len(),
                start.elapsed().as_secs_f64()
            );
        }

        Ok(dataset_file.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DemandRecord, ZoneCoordinate};

    fn sample() -> Dataset {
        Dataset {
            name: "brt".to_string(),
            records: vec![DemandRecord::new("Schiphol", "1012", 12.0)],
            coordinates: vec![
                ZoneCoordinate::new("Schiphol", 52.31, 4.76),
                ZoneCoordinate::new("1012", 52.37, 4.89),
            ],
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pairs.bin");
        DatasetFile::new(sample(), PERSISTENCE.dataset.version)
            .save_to_path(&path)
            .unwrap();

        let loaded = DatasetFileSource::new(&path).load_dataset().unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.bin");
        DatasetFile::new(sample(), PERSISTENCE.dataset.version + 1.0)
            .save_to_path(&path)
            .unwrap();

        let err = DatasetFileSource::new(&path).load_dataset().unwrap_err();
        assert!(
            err.to_string().contains("version mismatch"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(
            DatasetFileSource::new(dir.path().join("absent.bin"))
                .load_dataset()
                .is_err()
        );
    }
}
