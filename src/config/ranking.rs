//! Ranking and selection configuration

/// Bounds for the "top N pairs" selector
pub struct TopNConfig {
    pub max: usize,
    pub default: usize,
}

/// The Master Ranking Configuration
pub struct RankingConfig {
    /// Sentinel accepted in place of a zone id to disable zone filtering
    pub all_zones_sentinel: &'static str,
    /// Older label for "no filter"; still accepted on input
    pub all_zones_alias: &'static str,
    /// The fixed reference location most pairs are computed relative to
    pub hub_zone: &'static str,
    pub top_n: TopNConfig,
}

pub const RANKING: RankingConfig = RankingConfig {
    all_zones_sentinel: "all",
    all_zones_alias: "overall",
    hub_zone: "Schiphol",
    top_n: TopNConfig {
        max: 20,
        default: 10,
    },
};
