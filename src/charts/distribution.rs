use std::borrow::Borrow;

use serde::Serialize;

use super::group::OrderedGroups;
use super::{round_to, rows};
use crate::data::model::TrackRecord;

/// One slice of the mode pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeShare {
    pub name: String,
    pub count: usize,
    /// Share of all input tracks, one decimal.
    pub percentage: f64,
}

/// Count tracks per `mode` (empty mode counts as "Unknown"), in first-seen
/// order. Empty input yields no slices.
pub fn mode_distribution<R: Borrow<TrackRecord>>(tracks: &[R]) -> Vec<ModeShare> {
    let total = tracks.len();
    if total == 0 {
        return Vec::new();
    }

    let mut groups: OrderedGroups<usize> = OrderedGroups::new();
    for track in rows(tracks) {
        *groups.entry(track.mode_label()) += 1;
    }

    groups
        .into_vec()
        .into_iter()
        .map(|(name, count)| ModeShare {
            name,
            count,
            percentage: round_to(count as f64 / total as f64 * 100.0, 1),
        })
        .collect()
}
