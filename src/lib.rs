// Core modules
pub mod analysis;
pub mod commands;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use analysis::{
    ColorScheme, EnrichedPair, PaletteAssigner, RankedSelection, Rgb, UnmappablePolicy,
    ZonePairRanker, rank,
};
pub use data::{Dataset, LoadDataset};
pub use domain::{CoordinateTable, DemandRecord, ZoneCoordinate, ZoneFilter};
pub use error::{ErrorKind, PairError};

use std::path::PathBuf;

// CLI argument parsing
use clap::{Args, Parser, Subcommand};

use crate::config::RANKING;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prepared dataset file (see `make_dataset`)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// JSON array of demand records
    #[arg(long, global = true)]
    pub records: Option<PathBuf>,

    /// JSON array of zone coordinates
    #[arg(long, global = true)]
    pub coords: Option<PathBuf>,

    /// Read the JSON tables before the prepared dataset file
    #[arg(long, default_value_t = false, global = true)]
    pub prefer_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank zone pairs by BRT score and print the table (or the map overlay)
    Rank(RankArgs),
    /// List the zone selector choices
    Zones,
    /// Print evenly spaced colors from a ramp
    Palette(PaletteArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// Zone to filter on, or "all"
    #[arg(long, default_value = "all")]
    pub zone: ZoneFilter,

    /// Number of top pairs to show
    #[arg(long, default_value_t = RANKING.top_n.default)]
    pub top_n: usize,

    #[arg(long, default_value_t = ColorScheme::Categorical)]
    pub scheme: ColorScheme,

    /// Only draw routes that start at the hub
    #[arg(long, default_value_t = false)]
    pub hub_only: bool,

    /// List pairs without destination coordinates in the overlay instead of dropping them
    #[arg(long, default_value_t = false)]
    pub keep_unmappable: bool,

    /// Emit the table and map overlay as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PaletteArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub count: i64,

    #[arg(long, default_value_t = ColorScheme::Categorical)]
    pub scheme: ColorScheme,
}
