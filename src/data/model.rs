use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used by the source dataset to join co-credited artists.
pub const ARTIST_SEPARATOR: char = ',';

/// Label used for tracks whose `mode` cell is empty.
pub const UNKNOWN_MODE: &str = "Unknown";

// ---------------------------------------------------------------------------
// TrackRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single normalized track.
///
/// Every numeric attribute is an `f64`: the normalizer coerces integer- and
/// decimal-looking cells the same way and substitutes `0.0` for anything it
/// cannot read, so no attribute is ever missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub track_name: String,
    /// Raw artist field; may hold several names joined by [`ARTIST_SEPARATOR`].
    pub artist_name: String,
    pub artist_count: f64,
    pub released_year: f64,
    pub released_month: f64,
    pub released_day: f64,
    pub in_spotify_playlists: f64,
    pub in_spotify_charts: f64,
    pub streams: f64,
    pub in_apple_playlists: f64,
    pub in_apple_charts: f64,
    pub in_deezer_playlists: f64,
    pub in_deezer_charts: f64,
    pub in_shazam_charts: f64,
    pub bpm: f64,
    pub key: String,
    pub mode: String,
    pub danceability_percent: f64,
    pub valence_percent: f64,
    pub energy_percent: f64,
    pub acousticness_percent: f64,
    pub instrumentalness_percent: f64,
    pub liveness_percent: f64,
    pub speechiness_percent: f64,
}

impl TrackRecord {
    /// Individual artist names: split on the separator and trimmed. A blank
    /// fragment yields `""`, which counts as an artist like any other.
    pub fn artists(&self) -> impl Iterator<Item = &str> {
        self.artist_name.split(ARTIST_SEPARATOR).map(str::trim)
    }

    /// The `mode` value, or [`UNKNOWN_MODE`] when the cell was empty.
    pub fn mode_label(&self) -> &str {
        if self.mode.is_empty() {
            UNKNOWN_MODE
        } else {
            &self.mode
        }
    }

    /// Release year as text, e.g. `"2023"`.
    pub fn year_label(&self) -> String {
        number_label(self.released_year)
    }

    /// Value of one audio-feature percentage.
    pub fn feature(&self, feature: AudioFeature) -> f64 {
        match feature {
            AudioFeature::Danceability => self.danceability_percent,
            AudioFeature::Valence => self.valence_percent,
            AudioFeature::Energy => self.energy_percent,
            AudioFeature::Acousticness => self.acousticness_percent,
            AudioFeature::Instrumentalness => self.instrumentalness_percent,
            AudioFeature::Liveness => self.liveness_percent,
            AudioFeature::Speechiness => self.speechiness_percent,
        }
    }
}

/// Render a number the way it reads in the source data: integral values
/// without a fractional part (`2023`, not `2023.0`).
pub fn number_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        // `-0.0` prints as "0"
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ---------------------------------------------------------------------------
// AudioFeature – the percentage attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFeature {
    Danceability,
    Valence,
    Energy,
    Acousticness,
    Instrumentalness,
    Liveness,
    Speechiness,
}

impl AudioFeature {
    /// Features compared on the radar chart, in display order.
    pub const RADAR: [AudioFeature; 6] = [
        AudioFeature::Danceability,
        AudioFeature::Energy,
        AudioFeature::Valence,
        AudioFeature::Acousticness,
        AudioFeature::Speechiness,
        AudioFeature::Liveness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AudioFeature::Danceability => "Danceability",
            AudioFeature::Valence => "Valence",
            AudioFeature::Energy => "Energy",
            AudioFeature::Acousticness => "Acousticness",
            AudioFeature::Instrumentalness => "Instrumentalness",
            AudioFeature::Liveness => "Liveness",
            AudioFeature::Speechiness => "Speechiness",
        }
    }
}

impl fmt::Display for AudioFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TrackDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter options.
///
/// Built once per load and never mutated afterwards; filtered views borrow
/// from [`TrackDataset::tracks`].
#[derive(Debug, Clone, Default)]
pub struct TrackDataset {
    /// All tracks, in source row order.
    pub tracks: Vec<TrackRecord>,
    /// Distinct raw artist fields, sorted.
    pub artists: BTreeSet<String>,
    /// Distinct release years, newest first.
    pub years: Vec<f64>,
}

impl TrackDataset {
    /// Build the option indices from the loaded tracks.
    pub fn from_tracks(tracks: Vec<TrackRecord>) -> Self {
        let artists: BTreeSet<String> = tracks.iter().map(|t| t.artist_name.clone()).collect();

        let mut years: Vec<f64> = Vec::new();
        for track in &tracks {
            if !years.contains(&track.released_year) {
                years.push(track.released_year);
            }
        }
        years.sort_by(|a, b| b.total_cmp(a));

        TrackDataset {
            tracks,
            artists,
            years,
        }
    }

    /// The first `cap` artist options for a picker.
    pub fn artist_options(&self, cap: usize) -> Vec<&str> {
        self.artists.iter().take(cap).map(String::as_str).collect()
    }

    /// Year options as the text the year facet compares against.
    pub fn year_options(&self) -> Vec<String> {
        self.years.iter().map(|y| number_label(*y)).collect()
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
