//! What each CLI subcommand does, given already-parsed arguments.

use std::io::Write;

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use serde::Serialize;

use crate::analysis::{
    OriginPolicy, OverlayOptions, PaletteAssigner, RouteOverlay, ScoreRow, UnmappablePolicy,
    ZonePairRanker, build_overlay, score_table,
};
use crate::config::{PERSISTENCE, RANKING};
use crate::data::{Dataset, DatasetFile, DatasetFileSource, JsonTables, LoadDataset};
use crate::domain::ZoneFilter;
use crate::{Cli, Command, PaletteArgs, RankArgs};

/// Dataset file first unless the user asked for JSON first.
pub fn dataset_providers(cli: &Cli) -> Vec<Box<dyn LoadDataset>> {
    let file = DatasetFileSource::new(cli.dataset.clone().unwrap_or_else(DatasetFile::default_path));
    let json = JsonTables::new(
        cli.records
            .clone()
            .unwrap_or_else(|| PERSISTENCE.tables.records.into()),
        cli.coords
            .clone()
            .unwrap_or_else(|| PERSISTENCE.tables.coordinates.into()),
    );
    if cli.prefer_json {
        vec![Box::new(json), Box::new(file)]
    } else {
        vec![Box::new(file), Box::new(json)]
    }
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Palette(args) => run_palette(args, out),
        Command::Zones => {
            let dataset = load(cli)?;
            run_zones(&dataset, out)
        }
        Command::Rank(args) => {
            let dataset = load(cli)?;
            run_rank(&dataset, args, out)
        }
    }
}

fn load(cli: &Cli) -> Result<Dataset> {
    let (dataset, signature) = crate::data::load_first_available(&dataset_providers(cli))?;
    log::info!("Using {} ({} records)", signature, dataset.records.len());
    Ok(dataset)
}

pub fn run_palette(args: &PaletteArgs, out: &mut impl Write) -> Result<()> {
    let palette = PaletteAssigner::from_config()?;
    for color in palette.colors_for_count(args.count, args.scheme)? {
        writeln!(out, "{}", color.to_hex())?;
    }
    Ok(())
}

pub fn run_zones(dataset: &Dataset, out: &mut impl Write) -> Result<()> {
    let table = dataset.coordinate_table()?;
    writeln!(out, "{}", table.zone_choices().iter().join("\n"))?;
    Ok(())
}

#[derive(Serialize)]
struct RankReport<'a> {
    zone: String,
    top_n: usize,
    table: &'a [ScoreRow],
    overlay: &'a RouteOverlay,
}

pub fn run_rank(dataset: &Dataset, args: &RankArgs, out: &mut impl Write) -> Result<()> {
    if args.top_n > RANKING.top_n.max {
        bail!(
            "--top-n {} is above the supported maximum of {}",
            args.top_n,
            RANKING.top_n.max
        );
    }

    let coords = dataset
        .coordinate_table()
        .context("Coordinate table is not a valid lookup")?;

    if let ZoneFilter::Zone(zone) = &args.zone {
        if !dataset.has_records_for(zone) {
            log::info!("Zone '{}' has no recorded pairs", zone);
        }
    }

    let selection = ZonePairRanker::new(&coords).rank(&dataset.records, &args.zone, args.top_n)?;
    let colors = PaletteAssigner::from_config()?.colors(selection.len(), args.scheme);

    let options = OverlayOptions {
        origin_policy: if args.hub_only {
            OriginPolicy::configured_hub()
        } else {
            OriginPolicy::AnyOrigin
        },
        unmappable_policy: if args.keep_unmappable {
            UnmappablePolicy::Keep
        } else {
            UnmappablePolicy::Skip
        },
    };
    let overlay = build_overlay(&selection, &coords, &colors, &options);
    let rows = score_table(&selection, &colors);

    if args.json {
        let report = RankReport {
            zone: args.zone.to_string(),
            top_n: args.top_n,
            table: &rows,
            overlay: &overlay,
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write report")?;
        writeln!(out)?;
        return Ok(());
    }

    write_table(&rows, out)?;
    if !overlay.unplaced.is_empty() {
        writeln!(out)?;
        writeln!(out, "Not on the map:")?;
        for pair in &overlay.unplaced {
            writeln!(
                out,
                "  #{} {} → {} ({:?})",
                pair.rank, pair.origin, pair.destination, pair.reason
            )?;
        }
    }
    Ok(())
}

fn write_table(rows: &[ScoreRow], out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{:<8} {:<12} {:<12} {:>9}  {}",
        "Ranking", "Origin", "Destination", "BRT Score", "Color"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<8} {:<12} {:<12} {:>9}  {}",
            row.ranking,
            row.origin,
            row.destination,
            row.brt_score,
            row.color.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}
