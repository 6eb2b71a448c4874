//! Map-ready description of a ranked selection: markers, colored route
//! segments and their rank labels. Drawing them is somebody else's job.

use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::palette::Rgb;
use crate::analysis::zone_pair_ranker::{EnrichedPair, RankedSelection, UnmappablePolicy};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{OVERLAY, RANKING};
use crate::domain::{CoordinateTable, GeoPoint};

/// Which origins are allowed onto the map
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OriginPolicy {
    /// Draw every pair whose endpoints resolve
    #[default]
    AnyOrigin,
    /// Only draw pairs leaving the given hub; other pairs stay in the table
    HubOnly(String),
}

impl OriginPolicy {
    pub fn configured_hub() -> Self {
        OriginPolicy::HubOnly(RANKING.hub_zone.to_string())
    }

    fn admits(&self, origin: &str) -> bool {
        match self {
            OriginPolicy::AnyOrigin => true,
            OriginPolicy::HubOnly(hub) => origin == hub,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayOptions {
    pub origin_policy: OriginPolicy,
    pub unmappable_policy: UnmappablePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerRole {
    Origin,
    Destination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneMarker {
    pub zone_id: String,
    pub location: GeoPoint,
    pub role: MarkerRole,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    /// 1-based position in the ranked selection
    pub rank: usize,
    pub origin: String,
    pub destination: String,
    pub demand: f64,
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// Where the rank badge goes
    pub label_position: GeoPoint,
    pub color: String,
    pub weight: f32,
    pub opacity: f32,
}

/// Why a ranked pair did not become a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedReason {
    MissingDestination,
    MissingOrigin,
    NotFromHub,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnplacedPair {
    pub rank: usize,
    pub origin: String,
    pub destination: String,
    pub reason: UnplacedReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteOverlay {
    pub center: Option<GeoPoint>,
    pub zoom: u8,
    pub markers: Vec<ZoneMarker>,
    pub segments: Vec<RouteSegment>,
    /// Ranked pairs kept visible to the caller but not drawn
    pub unplaced: Vec<UnplacedPair>,
}

/// Lays out `selection` for drawing. `colors` is indexed by rank - 1; pairs
/// beyond its length reuse it cyclically.
pub fn build_overlay(
    selection: &RankedSelection,
    coords: &CoordinateTable,
    colors: &[Rgb],
    options: &OverlayOptions,
) -> RouteOverlay {
    let mut overlay = RouteOverlay {
        center: coords.centroid(),
        zoom: OVERLAY.initial_zoom,
        ..Default::default()
    };
    let mut placed_zones: HashSet<String> = HashSet::new();

    for (idx, pair) in selection.iter().enumerate() {
        let rank = idx + 1;
        let record = &pair.record;

        if !options.origin_policy.admits(&record.origin) {
            push_unplaced(&mut overlay, rank, pair, UnplacedReason::NotFromHub);
            continue;
        }

        let Some(to) = pair.destination_location else {
            match options.unmappable_policy {
                UnmappablePolicy::Keep => {
                    push_unplaced(&mut overlay, rank, pair, UnplacedReason::MissingDestination)
                }
                UnmappablePolicy::Skip => log::warn!(
                    "⚠️  No coordinates for destination '{}', skipping rank {}",
                    record.destination,
                    rank
                ),
            }
            continue;
        };

        let Some(from) = pair.origin_location else {
            log::warn!(
                "⚠️  No coordinates for origin '{}', rank {} left off the map",
                record.origin,
                rank
            );
            push_unplaced(&mut overlay, rank, pair, UnplacedReason::MissingOrigin);
            continue;
        };

        add_marker(&mut overlay, &mut placed_zones, &record.origin, from, MarkerRole::Origin);
        add_marker(
            &mut overlay,
            &mut placed_zones,
            &record.destination,
            to,
            MarkerRole::Destination,
        );

        let color = if colors.is_empty() {
            OVERLAY.destination_marker_color.to_string()
        } else {
            colors[idx % colors.len()].to_hex()
        };

        overlay.segments.push(RouteSegment {
            rank,
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            demand: record.demand,
            from,
            to,
            label_position: from.midpoint(&to),
            color,
            weight: OVERLAY.route_line_weight,
            opacity: OVERLAY.route_line_opacity,
        });
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_overlay {
        log::info!(
            "Overlay: {} segments, {} markers, {} unplaced",
            overlay.segments.len(),
            overlay.markers.len(),
            overlay.unplaced.len()
        );
    }

    overlay
}

fn push_unplaced(overlay: &mut RouteOverlay, rank: usize, pair: &EnrichedPair, reason: UnplacedReason) {
    overlay.unplaced.push(UnplacedPair {
        rank,
        origin: pair.record.origin.clone(),
        destination: pair.record.destination.clone(),
        reason,
    });
}

// First placement of a zone wins its role and color.
fn add_marker(
    overlay: &mut RouteOverlay,
    placed: &mut HashSet<String>,
    zone_id: &str,
    location: GeoPoint,
    role: MarkerRole,
) {
    if !placed.insert(zone_id.to_string()) {
        return;
    }
    let color = match role {
        MarkerRole::Origin => OVERLAY.origin_marker_color,
        MarkerRole::Destination => OVERLAY.destination_marker_color,
    };
    overlay.markers.push(ZoneMarker {
        zone_id: zone_id.to_string(),
        location,
        role,
        color,
    });
}
