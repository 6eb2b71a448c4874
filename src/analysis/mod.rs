// Ranking, coloring and layout of zone pairs
pub mod palette;
pub mod route_overlay;
pub mod score_table;
pub mod zone_pair_ranker;

// Re-export commonly used types
pub use palette::{ColorScheme, PaletteAssigner, Rgb};
pub use route_overlay::{OriginPolicy, OverlayOptions, RouteOverlay, build_overlay};
pub use score_table::{ScoreRow, score_table};
pub use zone_pair_ranker::{
    EnrichedPair, RankedSelection, UnmappablePolicy, ZonePairRanker, rank,
};
