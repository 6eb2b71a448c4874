use std::collections::HashMap;

use crate::config::RANKING;
use crate::domain::zone::{GeoPoint, ZoneCoordinate};
use crate::error::PairError;

/// Zone id → coordinate lookup with an unambiguous key.
///
/// Built once from reference rows and never mutated afterwards. Rows keep their
/// input order so selectors list zones the way the source table does.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    rows: Vec<ZoneCoordinate>,
    index: HashMap<String, usize>,
}

impl CoordinateTable {
    /// Fails on the first duplicated zone id rather than picking one of the matches.
    pub fn from_rows(rows: Vec<ZoneCoordinate>) -> Result<Self, PairError> {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.zone_id.clone(), i).is_some() {
                return Err(PairError::DuplicateZone(row.zone_id.clone()));
            }
        }
        Ok(Self { rows, index })
    }

    pub fn get(&self, zone_id: &str) -> Option<&ZoneCoordinate> {
        self.index.get(zone_id).map(|&i| &self.rows[i])
    }

    pub fn point(&self, zone_id: &str) -> Option<GeoPoint> {
        self.get(zone_id).map(ZoneCoordinate::point)
    }

    pub fn contains(&self, zone_id: &str) -> bool {
        self.index.contains_key(zone_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneCoordinate> {
        self.rows.iter()
    }

    /// Selector entries: the "all" sentinel first, then every zone in table order.
    pub fn zone_choices(&self) -> Vec<String> {
        std::iter::once(RANKING.all_zones_sentinel.to_string())
            .chain(self.rows.iter().map(|row| row.zone_id.clone()))
            .collect()
    }

    /// Mean latitude/longitude over every zone, used to centre the map.
    pub fn centroid(&self) -> Option<GeoPoint> {
        if self.rows.is_empty() {
            return None;
        }
        let n = self.rows.len() as f64;
        let (lat_sum, lon_sum) = self
            .rows
            .iter()
            .fold((0.0, 0.0), |(lat, lon), row| (lat + row.latitude, lon + row.longitude));
        Some(GeoPoint::new(lat_sum / n, lon_sum / n))
    }
}
