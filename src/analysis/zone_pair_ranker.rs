use std::cmp::Ordering;

use serde::Serialize;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{CoordinateTable, DemandRecord, GeoPoint, ZoneFilter};
use crate::error::PairError;

/// A demand record joined with the coordinates of its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPair {
    pub record: DemandRecord,
    /// `None` when the destination is missing from the coordinate table
    pub destination_location: Option<GeoPoint>,
    /// Only the overlay needs this; it plays no part in the mappable flag
    pub origin_location: Option<GeoPoint>,
}

impl EnrichedPair {
    /// False when the destination could not be resolved. The pair still ranks
    /// normally; whoever draws it decides what to do.
    pub fn is_mappable(&self) -> bool {
        self.destination_location.is_some()
    }
}

/// What a consumer does with pairs whose destination has no coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappablePolicy {
    /// Leave them out (and warn)
    #[default]
    Skip,
    /// Keep them, so the consumer can show them without a location
    Keep,
}

/// Top-N pairs, highest demand first, ties in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedSelection {
    pairs: Vec<EnrichedPair>,
}

impl RankedSelection {
    pub fn pairs(&self) -> &[EnrichedPair] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<EnrichedPair> {
        self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedPair> {
        self.pairs.iter()
    }

    pub fn mappable(&self) -> impl Iterator<Item = &EnrichedPair> {
        self.pairs.iter().filter(|p| p.is_mappable())
    }

    pub fn unmappable(&self) -> impl Iterator<Item = &EnrichedPair> {
        self.pairs.iter().filter(|p| !p.is_mappable())
    }

    pub fn has_unmappable(&self) -> bool {
        self.pairs.iter().any(|p| !p.is_mappable())
    }

    /// Applies the caller's choice for unmappable pairs, keeping rank order.
    pub fn resolve(&self, policy: UnmappablePolicy) -> Vec<&EnrichedPair> {
        match policy {
            UnmappablePolicy::Keep => self.pairs.iter().collect(),
            UnmappablePolicy::Skip => {
                for pair in self.unmappable() {
                    log::warn!(
                        "⚠️  No coordinates for destination '{}', skipping {}",
                        pair.record.destination,
                        pair.record.pair_label()
                    );
                }
                self.mappable().collect()
            }
        }
    }
}

/// Joins demand records against a fixed coordinate table and ranks them.
///
/// Holds no state between calls, so the same ranker can be re-run for every
/// change of filter or top-N.
pub struct ZonePairRanker<'a> {
    coords: &'a CoordinateTable,
}

impl<'a> ZonePairRanker<'a> {
    pub fn new(coords: &'a CoordinateTable) -> Self {
        Self { coords }
    }

    pub fn rank(
        &self,
        records: &[DemandRecord],
        filter: &ZoneFilter,
        top_n: usize,
    ) -> Result<RankedSelection, PairError> {
        if top_n < 1 {
            return Err(PairError::InvalidTopN(top_n));
        }

        let mut survivors: Vec<&DemandRecord> = records
            .iter()
            .filter(|r| filter.matches(&r.origin, &r.destination))
            .collect();
        let filtered_count = survivors.len();

        // sort_by is stable: equal demands keep their input order
        survivors.sort_by(|a, b| demand_descending(a.demand, b.demand));
        survivors.truncate(top_n);

        let pairs: Vec<EnrichedPair> = survivors.into_iter().map(|r| self.enrich(r)).collect();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ranking {
            log::info!(
                "Ranked {} of {} records (filter: {}, top_n: {}) -> {} pairs, {} unmappable",
                filtered_count,
                records.len(),
                filter,
                top_n,
                pairs.len(),
                pairs.iter().filter(|p| !p.is_mappable()).count()
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = filtered_count;

        Ok(RankedSelection { pairs })
    }

    fn enrich(&self, record: &DemandRecord) -> EnrichedPair {
        EnrichedPair {
            destination_location: self.coords.point(&record.destination),
            origin_location: self.coords.point(&record.origin),
            record: record.clone(),
        }
    }
}

/// Convenience wrapper for one-off calls.
pub fn rank(
    records: &[DemandRecord],
    coords: &CoordinateTable,
    filter: &ZoneFilter,
    top_n: usize,
) -> Result<RankedSelection, PairError> {
    ZonePairRanker::new(coords).rank(records, filter, top_n)
}

// Descending by demand; NaN scores sink to the bottom.
fn demand_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ZoneCoordinate;

    fn abcd_records() -> Vec<DemandRecord> {
        vec![
            DemandRecord::new("A", "B", 10.0),
            DemandRecord::new("A", "C", 30.0),
            DemandRecord::new("A", "D", 30.0),
        ]
    }

    fn abcd_coords() -> CoordinateTable {
        CoordinateTable::from_rows(vec![
            ZoneCoordinate::new("A", 52.31, 4.76),
            ZoneCoordinate::new("B", 52.37, 4.89),
            ZoneCoordinate::new("C", 52.09, 5.12),
            ZoneCoordinate::new("D", 51.92, 4.48),
        ])
        .unwrap()
    }

    fn labels(selection: &RankedSelection) -> Vec<(String, String, f64)> {
        selection
            .iter()
            .map(|p| {
                (
                    p.record.origin.clone(),
                    p.record.destination.clone(),
                    p.record.demand,
                )
            })
            .collect()
    }

    #[test]
    fn test_top_two_keeps_input_order_for_ties() {
        let selection = rank(&abcd_records(), &abcd_coords(), &ZoneFilter::All, 2).unwrap();
        assert_eq!(
            labels(&selection),
            vec![
                ("A".to_string(), "C".to_string(), 30.0),
                ("A".to_string(), "D".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn test_ties_follow_input_order_when_reversed() {
        let records = vec![
            DemandRecord::new("A", "D", 30.0),
            DemandRecord::new("A", "B", 10.0),
            DemandRecord::new("A", "C", 30.0),
        ];
        let selection = rank(&records, &abcd_coords(), &ZoneFilter::All, 3).unwrap();
        let destinations: Vec<&str> = selection
            .iter()
            .map(|p| p.record.destination.as_str())
            .collect();
        assert_eq!(destinations, vec!["D", "C", "B"]);
    }

    #[test]
    fn test_zone_filter_keeps_either_end() {
        let selection =
            rank(&abcd_records(), &abcd_coords(), &ZoneFilter::zone("B"), 2).unwrap();
        assert_eq!(
            labels(&selection),
            vec![("A".to_string(), "B".to_string(), 10.0)]
        );

        let by_origin = rank(&abcd_records(), &abcd_coords(), &ZoneFilter::zone("A"), 5).unwrap();
        assert_eq!(by_origin.len(), 3);
    }

    #[test]
    fn test_unknown_zone_yields_empty_selection() {
        let selection =
            rank(&abcd_records(), &abcd_coords(), &ZoneFilter::zone("Z"), 5).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_records_is_not_an_error() {
        let selection = rank(&[], &abcd_coords(), &ZoneFilter::All, 3).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        let err = rank(&abcd_records(), &abcd_coords(), &ZoneFilter::All, 0).unwrap_err();
        assert_eq!(err, PairError::InvalidTopN(0));
    }

    #[test]
    fn test_length_is_min_of_top_n_and_filtered() {
        let coords = abcd_coords();
        for top_n in 1..=5 {
            let selection = rank(&abcd_records(), &coords, &ZoneFilter::All, top_n).unwrap();
            assert_eq!(selection.len(), top_n.min(3), "top_n = {}", top_n);
        }
    }

    #[test]
    fn test_output_is_non_increasing() {
        let records = vec![
            DemandRecord::new("A", "B", 3.0),
            DemandRecord::new("A", "C", 7.5),
            DemandRecord::new("B", "C", f64::NAN),
            DemandRecord::new("C", "D", 7.5),
            DemandRecord::new("D", "A", 1.0),
            DemandRecord::new("B", "D", 12.0),
        ];
        let selection = rank(&records, &abcd_coords(), &ZoneFilter::All, 6).unwrap();
        let demands: Vec<f64> = selection.iter().map(|p| p.record.demand).collect();
        assert!(demands[..5].windows(2).all(|w| w[0] >= w[1]), "{:?}", demands);
        assert!(demands[5].is_nan(), "NaN should rank last: {:?}", demands);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let coords = abcd_coords();
        let ranker = ZonePairRanker::new(&coords);
        let first = ranker.rank(&abcd_records(), &ZoneFilter::All, 2).unwrap();
        let _other = ranker.rank(&abcd_records(), &ZoneFilter::zone("B"), 1).unwrap();
        let second = ranker.rank(&abcd_records(), &ZoneFilter::All, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_destination_is_flagged_not_dropped() {
        let coords = CoordinateTable::from_rows(vec![
            ZoneCoordinate::new("A", 52.31, 4.76),
            ZoneCoordinate::new("B", 52.37, 4.89),
            ZoneCoordinate::new("C", 52.09, 5.12),
        ])
        .unwrap();
        let selection = rank(&abcd_records(), &coords, &ZoneFilter::All, 3).unwrap();

        assert_eq!(selection.len(), 3);
        let d_pair = &selection.pairs()[1];
        assert_eq!(d_pair.record.destination, "D");
        assert_eq!(d_pair.record.demand, 30.0);
        assert!(!d_pair.is_mappable());
        assert!(d_pair.destination_location.is_none());
        assert!(selection.has_unmappable());

        assert_eq!(selection.resolve(UnmappablePolicy::Keep).len(), 3);
        let skipped = selection.resolve(UnmappablePolicy::Skip);
        assert_eq!(skipped.len(), 2);
        assert!(skipped.iter().all(|p| p.is_mappable()));
    }

    #[test]
    fn test_join_attaches_both_endpoints() {
        let selection = rank(&abcd_records(), &abcd_coords(), &ZoneFilter::All, 1).unwrap();
        let pair = &selection.pairs()[0];
        assert_eq!(pair.destination_location, Some(GeoPoint::new(52.09, 5.12)));
        assert_eq!(pair.origin_location, Some(GeoPoint::new(52.31, 4.76)));
    }
}
