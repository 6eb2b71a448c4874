//! File persistence and serialization configuration

pub struct TablePaths {
    /// JSON array of demand records
    pub records: &'static str,
    /// JSON array of zone coordinates
    pub coordinates: &'static str,
}

pub struct DatasetPersistence {
    pub directory: &'static str,
    pub filename_without_ext: &'static str,
    /// Current version of the dataset serialization format
    pub version: f64,
}

pub struct PersistenceConfig {
    pub tables: TablePaths,
    pub dataset: DatasetPersistence,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    tables: TablePaths {
        records: "data/brt_scores.json",
        coordinates: "data/zone_coordinates.json",
    },
    dataset: DatasetPersistence {
        directory: "data",
        filename_without_ext: "zone_pairs",
        version: 1.0,
    },
};

/// Example: "zone_pairs_v1.bin"
pub fn dataset_filename() -> String {
    format!(
        "{}_v{}.bin",
        PERSISTENCE.dataset.filename_without_ext, PERSISTENCE.dataset.version
    )
}
