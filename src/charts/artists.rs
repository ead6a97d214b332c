use std::borrow::Borrow;

use serde::Serialize;

use super::group::{OrderedGroups, StreamTally};
use super::{round_to, rows};
use crate::data::model::TrackRecord;

/// Per-artist stream totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistTotal {
    pub name: String,
    pub total_streams: f64,
    pub track_count: usize,
    /// `total_streams` in billions, two decimals.
    pub streams_in_billions: f64,
}

/// Totals for every artist, in the order artists are first seen.
///
/// A co-credited track counts in full towards each of its artists.
pub fn artist_totals<R: Borrow<TrackRecord>>(tracks: &[R]) -> Vec<ArtistTotal> {
    let mut groups: OrderedGroups<StreamTally> = OrderedGroups::new();
    for track in rows(tracks) {
        for artist in track.artists() {
            groups.entry(artist).add(track.streams);
        }
    }

    groups
        .into_vec()
        .into_iter()
        .map(|(name, tally)| ArtistTotal {
            name,
            total_streams: tally.total_streams,
            track_count: tally.track_count,
            streams_in_billions: round_to(tally.total_streams / 1_000_000_000.0, 2),
        })
        .collect()
}

/// The `n` artists with the most total streams, highest first.
pub fn top_artists<R: Borrow<TrackRecord>>(tracks: &[R], n: usize) -> Vec<ArtistTotal> {
    let mut totals = artist_totals(tracks);
    totals.sort_by(|a, b| b.total_streams.total_cmp(&a.total_streams));
    totals.truncate(n);
    totals
}
