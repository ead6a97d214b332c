//! Aggregation engine: turns a (filtered) track list into chart-ready rows.
//!
//! Every function here is pure and takes `&[R]` where `R: Borrow<TrackRecord>`,
//! so it works on the owned dataset as well as on the borrowed view returned
//! by [`crate::data::filter::apply_filter`]. Rankings use a stable sort, so
//! ties keep their input order.

use std::borrow::Borrow;

use serde::Serialize;

use crate::config::ChartLimits;
use crate::data::model::TrackRecord;

pub mod artists;
pub mod bubble;
pub mod comparison;
pub mod distribution;
pub mod group;
pub mod ranking;
pub mod summary;
pub mod trend;

use artists::ArtistTotal;
use bubble::BubbleChart;
use comparison::{FeatureRow, TrackSelection};
use distribution::ModeShare;
use ranking::{PlaylistPlatform, RankedTrack, TopTrack};
use summary::DashboardSummary;
use trend::TrendPoint;

/// Iterate the records behind any borrowed-or-owned slice.
pub(crate) fn rows<R: Borrow<TrackRecord>>(tracks: &[R]) -> impl Iterator<Item = &TrackRecord> {
    tracks.iter().map(Borrow::<TrackRecord>::borrow)
}

/// Round to the nearest integer, halves towards +∞.
pub fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` rounds in the addition for 0.49999999999999994 and odd
    // integers above 2^52, so only exact halves are special-cased.
    if value - value.floor() == 0.5 {
        value.ceil()
    } else {
        value.round()
    }
}

/// Round to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ---------------------------------------------------------------------------
// Whole-dashboard snapshot
// ---------------------------------------------------------------------------

/// Every chart for one filtered view, self-contained for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub summary: DashboardSummary,
    pub top_tracks: Vec<TopTrack>,
    pub top_playlisted: Vec<RankedTrack>,
    pub top_artists: Vec<ArtistTotal>,
    pub stream_trend: Vec<TrendPoint>,
    pub mode_distribution: Vec<ModeShare>,
    pub comparison_candidates: Vec<String>,
    /// Names currently picked for comparison, in pick order.
    pub selected_tracks: Vec<String>,
    pub feature_comparison: Vec<FeatureRow>,
    pub bubbles: BubbleChart,
}

/// Run every aggregation over `tracks`.
pub fn build_dashboard<R: Borrow<TrackRecord>>(
    tracks: &[R],
    selection: &TrackSelection,
    limits: &ChartLimits,
) -> DashboardSnapshot {
    log::debug!("Building dashboard over {} tracks", tracks.len());
    DashboardSnapshot {
        summary: summary::summarize(tracks),
        top_tracks: ranking::top_tracks(tracks, limits.top_tracks),
        top_playlisted: ranking::top_by_playlists(tracks, PlaylistPlatform::Spotify, limits.top_tracks),
        top_artists: artists::top_artists(tracks, limits.top_artists),
        stream_trend: trend::stream_trend(tracks, limits.trend_window),
        mode_distribution: distribution::mode_distribution(tracks),
        comparison_candidates: comparison::comparison_candidates(tracks, limits.comparison_candidates),
        selected_tracks: selection.names().to_vec(),
        feature_comparison: comparison::feature_comparison(tracks, selection),
        bubbles: bubble::bubble_chart(tracks, limits.bubble_points),
    }
}
