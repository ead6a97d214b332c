use std::borrow::Borrow;

use serde::Serialize;

use super::{round_half_up, rows};
use crate::data::model::TrackRecord;

/// One bar of the top-tracks chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopTrack {
    pub track_name: String,
    pub artist_name: String,
    pub streams: f64,
    pub streams_in_millions: f64,
}

/// A track ranked by an arbitrary metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTrack {
    pub track_name: String,
    pub artist_name: String,
    pub value: f64,
}

/// The `n` most-streamed tracks, highest first. Equal stream counts keep
/// their input order.
pub fn top_by_streams<R: Borrow<TrackRecord>>(tracks: &[R], n: usize) -> Vec<&TrackRecord> {
    let mut sorted: Vec<&TrackRecord> = rows(tracks).collect();
    sorted.sort_by(|a, b| b.streams.total_cmp(&a.streams));
    sorted.truncate(n);
    sorted
}

/// Rows for the top-tracks bar chart. Names are returned in full.
pub fn top_tracks<R: Borrow<TrackRecord>>(tracks: &[R], n: usize) -> Vec<TopTrack> {
    top_by_streams(tracks, n)
        .into_iter()
        .map(|t| TopTrack {
            track_name: t.track_name.clone(),
            artist_name: t.artist_name.clone(),
            streams: t.streams,
            streams_in_millions: round_half_up(t.streams / 1_000_000.0),
        })
        .collect()
}

/// Rank tracks by `metric`, highest first.
///
/// Tracks for which `metric` yields `None` or a non-finite number are left
/// out of the ranking entirely rather than ranked as zero.
pub fn top_by_metric<R, F>(tracks: &[R], n: usize, metric: F) -> Vec<RankedTrack>
where
    R: Borrow<TrackRecord>,
    F: Fn(&TrackRecord) -> Option<f64>,
{
    let mut ranked: Vec<(&TrackRecord, f64)> = rows(tracks)
        .filter_map(|t| metric(t).filter(|v| v.is_finite()).map(|v| (t, v)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(t, value)| RankedTrack {
            track_name: t.track_name.clone(),
            artist_name: t.artist_name.clone(),
            value,
        })
        .collect()
}

/// Platforms whose playlist counts the dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistPlatform {
    Spotify,
    Apple,
    Deezer,
}

impl PlaylistPlatform {
    pub fn playlist_count(self, track: &TrackRecord) -> Option<f64> {
        let value = match self {
            PlaylistPlatform::Spotify => track.in_spotify_playlists,
            PlaylistPlatform::Apple => track.in_apple_playlists,
            PlaylistPlatform::Deezer => track.in_deezer_playlists,
        };
        value.is_finite().then_some(value)
    }
}

/// Rows for the playlist-reach bar chart.
pub fn top_by_playlists<R: Borrow<TrackRecord>>(
    tracks: &[R],
    platform: PlaylistPlatform,
    n: usize,
) -> Vec<RankedTrack> {
    top_by_metric(tracks, n, |t| platform.playlist_count(t))
}
