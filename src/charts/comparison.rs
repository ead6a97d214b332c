use std::borrow::Borrow;

use serde::Serialize;

use super::ranking::top_by_streams;
use super::rows;
use crate::data::model::{AudioFeature, TrackRecord};

/// Default number of tracks that can be compared at once.
pub const DEFAULT_MAX_COMPARED: usize = 3;

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Outcome of [`TrackSelection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// The selection was full; nothing changed.
    Rejected,
}

/// Track names picked for the feature comparison, in pick order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSelection {
    selected: Vec<String>,
    capacity: usize,
}

impl TrackSelection {
    pub fn new(capacity: usize) -> Self {
        TrackSelection {
            selected: Vec::new(),
            capacity,
        }
    }

    /// Add `name`, or remove it if it is already selected. Adding to a full
    /// selection is rejected.
    pub fn toggle(&mut self, name: &str) -> SelectionChange {
        if let Some(pos) = self.selected.iter().position(|s| s == name) {
            self.selected.remove(pos);
            SelectionChange::Removed
        } else if self.selected.len() < self.capacity {
            self.selected.push(name.to_string());
            SelectionChange::Added
        } else {
            log::debug!("Comparison full ({}), ignoring {name:?}", self.capacity);
            SelectionChange::Rejected
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    pub fn names(&self) -> &[String] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl Default for TrackSelection {
    fn default() -> Self {
        TrackSelection::new(DEFAULT_MAX_COMPARED)
    }
}

// ---------------------------------------------------------------------------
// Radar rows
// ---------------------------------------------------------------------------

/// One compared track's value on one feature axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesValue {
    pub track_name: String,
    pub value: f64,
}

/// One radar axis: the feature and every compared track's raw percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub feature: AudioFeature,
    pub label: &'static str,
    pub series: Vec<SeriesValue>,
}

/// Names offered in the comparison picker: the `n` most-streamed tracks.
pub fn comparison_candidates<R: Borrow<TrackRecord>>(tracks: &[R], n: usize) -> Vec<String> {
    top_by_streams(tracks, n)
        .into_iter()
        .map(|t| t.track_name.clone())
        .collect()
}

/// Tracks that the comparison draws: every row whose name is selected, in
/// input order. An empty selection falls back to the single most-streamed
/// track.
pub fn compared_tracks<'a, R: Borrow<TrackRecord>>(
    tracks: &'a [R],
    selection: &TrackSelection,
) -> Vec<&'a TrackRecord> {
    if selection.is_empty() {
        return top_by_streams(tracks, 1);
    }
    rows(tracks)
        .filter(|t| selection.contains(&t.track_name))
        .collect()
}

/// One row per radar feature with each compared track's value.
pub fn feature_comparison<R: Borrow<TrackRecord>>(
    tracks: &[R],
    selection: &TrackSelection,
) -> Vec<FeatureRow> {
    let compared = compared_tracks(tracks, selection);
    AudioFeature::RADAR
        .iter()
        .map(|&feature| FeatureRow {
            feature,
            label: feature.label(),
            series: compared
                .iter()
                .map(|t| SeriesValue {
                    track_name: t.track_name.clone(),
                    value: t.feature(feature),
                })
                .collect(),
        })
        .collect()
}
