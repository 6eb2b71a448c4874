use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::PERSISTENCE;
use crate::data::{Dataset, LoadDataset};
use crate::domain::{DemandRecord, ZoneCoordinate};

/// Postal codes arrive as strings in some exports and as numbers in others.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawZoneId {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawZoneId> for String {
    fn from(raw: RawZoneId) -> Self {
        match raw {
            RawZoneId::Text(s) => s,
            RawZoneId::Integer(i) => i.to_string(),
            // 1012.0 -> "1012"
            RawZoneId::Float(f) if f.fract() == 0.0 => format!("{:.0}", f),
            RawZoneId::Float(f) => f.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawDemandRow {
    #[serde(alias = "Origin")]
    origin: RawZoneId,
    #[serde(alias = "Destination")]
    destination: RawZoneId,
    #[serde(alias = "Demand", alias = "brt_score", alias = "BRT Score")]
    demand: f64,
}

#[derive(Deserialize)]
struct RawZoneRow {
    #[serde(alias = "postcode4")]
    zone_id: RawZoneId,
    latitude: f64,
    longitude: f64,
}

pub fn parse_records(json: &str) -> Result<Vec<DemandRecord>> {
    let rows: Vec<RawDemandRow> =
        serde_json::from_str(json).context("Failed to parse demand records")?;
    Ok(rows
        .into_iter()
        .map(|row| DemandRecord::new(String::from(row.origin), String::from(row.destination), row.demand))
        .collect())
}

pub fn parse_coordinates(json: &str) -> Result<Vec<ZoneCoordinate>> {
    let rows: Vec<RawZoneRow> =
        serde_json::from_str(json).context("Failed to parse zone coordinates")?;
    Ok(rows
        .into_iter()
        .map(|row| ZoneCoordinate::new(String::from(row.zone_id), row.latitude, row.longitude))
        .collect())
}

/// Two JSON arrays on disk: demand records and zone coordinates
pub struct JsonTables {
    pub records_path: PathBuf,
    pub coordinates_path: PathBuf,
}

impl JsonTables {
    pub fn new(records_path: impl Into<PathBuf>, coordinates_path: impl Into<PathBuf>) -> Self {
        Self {
            records_path: records_path.into(),
            coordinates_path: coordinates_path.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            PERSISTENCE.tables.records,
            PERSISTENCE.tables.coordinates,
        )
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(format!("Failed to read table: {}", path.display()))
}

impl LoadDataset for JsonTables {
    fn signature(&self) -> &'static str {
        "JSON tables"
    }

    fn load_dataset(&self) -> Result<Dataset> {
        let records = parse_records(&read_to_string(&self.records_path)?)
            .with_context(|| format!("in {}", self.records_path.display()))?;
        let coordinates = parse_coordinates(&read_to_string(&self.coordinates_path)?)
            .with_context(|| format!("in {}", self.coordinates_path.display()))?;

        log::info!(
            "Loaded {} demand records and {} zone coordinates from JSON",
            records.len(),
            coordinates.len()
        );

        Ok(Dataset {
            name: self
                .records_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            records,
            coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_accepts_source_column_names() {
        let json = r#"[
            {"Origin": "Schiphol", "Destination": 1012, "Demand": 41.5},
            {"origin": "2011", "destination": "Schiphol", "brt_score": 3}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(
            records,
            vec![
                DemandRecord::new("Schiphol", "1012", 41.5),
                DemandRecord::new("2011", "Schiphol", 3.0),
            ]
        );
    }

    #[test]
    fn test_parse_coordinates_stringifies_numeric_ids() {
        let json = r#"[
            {"postcode4": 1012.0, "latitude": 52.37, "longitude": 4.89},
            {"zone_id": "Schiphol", "latitude": 52.31, "longitude": 4.76}
        ]"#;
        let coords = parse_coordinates(json).unwrap();
        assert_eq!(coords[0].zone_id, "1012");
        assert_eq!(coords[1], ZoneCoordinate::new("Schiphol", 52.31, 4.76));
    }

    #[test]
    fn test_malformed_table_is_an_error() {
        assert!(parse_records(r#"[{"origin": "A"}]"#).is_err());
        assert!(parse_coordinates("not json").is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let records_path = dir.path().join("scores.json");
        let coords_path = dir.path().join("coords.json");
        fs::write(
            &records_path,
            r#"[{"origin": "Schiphol", "destination": "1012", "demand": 7.0}]"#,
        )
        .unwrap();
        fs::write(
            &coords_path,
            r#"[{"zone_id": "1012", "latitude": 52.37, "longitude": 4.89}]"#,
        )
        .unwrap();

        let data = JsonTables::new(&records_path, &coords_path)
            .load_dataset()
            .unwrap();
        assert_eq!(data.name, "scores");
        assert_eq!(data.records.len(), 1);
        assert_eq!(data.coordinates.len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let tables = JsonTables::new(dir.path().join("a.json"), dir.path().join("b.json"));
        assert!(tables.load_dataset().is_err());
    }
}
