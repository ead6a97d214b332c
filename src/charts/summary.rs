use std::borrow::Borrow;
use std::collections::HashSet;

use serde::Serialize;

use super::{round_to, rows};
use crate::data::model::TrackRecord;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_tracks: usize,
    pub total_streams: f64,
    pub unique_artists: usize,
    /// `0.0` when there are no tracks.
    pub average_streams: f64,
    pub total_streams_in_billions: f64,
    pub average_streams_in_millions: f64,
}

pub fn summarize<R: Borrow<TrackRecord>>(tracks: &[R]) -> DashboardSummary {
    let total_tracks = tracks.len();
    let total_streams: f64 = rows(tracks).map(|t| t.streams).sum();
    let unique_artists = rows(tracks)
        .flat_map(|t| t.artists())
        .collect::<HashSet<&str>>()
        .len();
    let average_streams = if total_tracks == 0 {
        0.0
    } else {
        total_streams / total_tracks as f64
    };

    DashboardSummary {
        total_tracks,
        total_streams,
        unique_artists,
        average_streams,
        total_streams_in_billions: round_to(total_streams / 1_000_000_000.0, 1),
        average_streams_in_millions: round_to(average_streams / 1_000_000.0, 1),
    }
}
