use serde::Serialize;

use crate::analysis::palette::Rgb;
use crate::analysis::zone_pair_ranker::RankedSelection;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub ranking: usize,
    pub origin: String,
    pub destination: String,
    /// Demand rounded half-to-even to a whole score
    pub brt_score: i64,
    pub mappable: bool,
    /// Hex color of the pair's route, if one was assigned
    pub color: Option<String>,
}

/// Every ranked pair becomes a row, including the ones that cannot be drawn.
pub fn score_table(selection: &RankedSelection, colors: &[Rgb]) -> Vec<ScoreRow> {
    selection
        .iter()
        .enumerate()
        .map(|(idx, pair)| ScoreRow {
            ranking: idx + 1,
            origin: pair.record.origin.clone(),
            destination: pair.record.destination.clone(),
            brt_score: round_score(pair.record.demand),
            mappable: pair.is_mappable(),
            color: colors.get(idx).map(Rgb::to_hex),
        })
        .collect()
}

// NaN becomes 0 via the saturating float-to-int cast
fn round_score(demand: f64) -> i64 {
    demand.round_ties_even() as i64
}
