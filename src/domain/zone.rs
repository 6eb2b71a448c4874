use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::RANKING;

/// A latitude/longitude pair in decimal degrees (WGS84)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Plain arithmetic mean of the two points. Good enough for label placement
    /// at city scale; not a great-circle midpoint.
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }
}

/// Reference location of a single postal zone
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ZoneCoordinate {
    pub zone_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ZoneCoordinate {
    pub fn new(zone_id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            zone_id: zone_id.into(),
            latitude,
            longitude,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Which pairs survive the zone filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoneFilter {
    /// No filtering
    #[default]
    All,
    /// Keep pairs where the zone is either the origin or the destination
    Zone(String),
}

impl ZoneFilter {
    pub fn zone(zone_id: impl Into<String>) -> Self {
        ZoneFilter::Zone(zone_id.into())
    }

    pub fn matches(&self, origin: &str, destination: &str) -> bool {
        match self {
            ZoneFilter::All => true,
            ZoneFilter::Zone(zone) => origin == zone || destination == zone,
        }
    }
}

impl FromStr for ZoneFilter {
    type Err = std::convert::Infallible;

    // Anything that isn't the sentinel is taken as a zone id; an unknown zone
    // just filters everything out.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(RANKING.all_zones_sentinel)
            || trimmed.eq_ignore_ascii_case(RANKING.all_zones_alias)
        {
            Ok(ZoneFilter::All)
        } else {
            Ok(ZoneFilter::Zone(trimmed.to_string()))
        }
    }
}

impl fmt::Display for ZoneFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZoneFilter::All => write!(f, "{}", RANKING.all_zones_sentinel),
            ZoneFilter::Zone(zone) => write!(f, "{}", zone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<ZoneFilter>().unwrap(), ZoneFilter::All);
        assert_eq!("ALL".parse::<ZoneFilter>().unwrap(), ZoneFilter::All);
        assert_eq!("Overall".parse::<ZoneFilter>().unwrap(), ZoneFilter::All);
        assert_eq!(
            " 1012 ".parse::<ZoneFilter>().unwrap(),
            ZoneFilter::zone("1012")
        );
    }

    #[test]
    fn test_filter_matches_either_end() {
        let filter = ZoneFilter::zone("B");
        assert!(filter.matches("A", "B"));
        assert!(filter.matches("B", "C"));
        assert!(!filter.matches("A", "C"));
        assert!(ZoneFilter::All.matches("A", "C"));
    }

    #[test]
    fn test_midpoint() {
        let a = GeoPoint::new(52.0, 4.0);
        let b = GeoPoint::new(53.0, 5.0);
        assert_eq!(a.midpoint(&b), GeoPoint::new(52.5, 4.5));
    }
}
