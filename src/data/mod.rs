// Loading the input tables before the pipeline runs
pub mod dataset_file;
pub mod json_tables;

use anyhow::{Result, anyhow};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{CoordinateTable, DemandRecord, ZoneCoordinate};
use crate::error::PairError;

// Re-export commonly used types
pub use dataset_file::{DatasetFile, DatasetFileSource};
pub use json_tables::JsonTables;

pub trait LoadDataset {
    // Either produce a dataset OR return an anyhow::Error
    fn load_dataset(&self) -> Result<Dataset>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Tries each provider in turn and returns the first dataset that loads.
pub fn load_first_available(providers: &[Box<dyn LoadDataset>]) -> Result<(Dataset, &'static str)> {
    for provider in providers {
        match provider.load_dataset() {
            Ok(data) => return Ok((data, provider.signature())),
            Err(e) => {
                log::info!("{} unavailable: {:#}", provider.signature(), e);
                // Continue to the next provider
            }
        }
    }
    Err(anyhow!("All dataset providers failed to load data"))
}

/// The raw input tables, exactly as loaded
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    pub name: String, // Metadata e.g. "Schiphol BRT scores".
    pub records: Vec<DemandRecord>,
    pub coordinates: Vec<ZoneCoordinate>,
}

impl Dataset {
    /// Builds the join lookup; fails on duplicated zone ids.
    pub fn coordinate_table(&self) -> Result<CoordinateTable, PairError> {
        CoordinateTable::from_rows(self.coordinates.clone())
    }

    /// Zones that occur in at least one record, in first-seen order
    pub fn record_zones(&self) -> Vec<&str> {
        self.records
            .iter()
            .flat_map(|r| [r.origin.as_str(), r.destination.as_str()])
            .unique()
            .collect()
    }

    pub fn has_records_for(&self, zone_id: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.origin == zone_id || r.destination == zone_id)
    }
}
