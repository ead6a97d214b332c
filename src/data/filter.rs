use serde::{Deserialize, Serialize};

use super::model::TrackRecord;

// ---------------------------------------------------------------------------
// Filter configuration
// ---------------------------------------------------------------------------

/// Inclusive percentage range.
///
/// `low <= high` is expected but not enforced: an inverted range is valid
/// input that simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub low: f64,
    pub high: f64,
}

impl PercentRange {
    pub fn new(low: f64, high: f64) -> Self {
        PercentRange { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl Default for PercentRange {
    fn default() -> Self {
        PercentRange::new(0.0, 100.0)
    }
}

/// The six filter facets. The default value shows everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Case-insensitive substring of the track or artist name; empty = off.
    pub search_term: String,
    /// Substring of the raw artist field; empty = off.
    pub selected_artist: String,
    /// Exact release year as text; empty = off.
    pub selected_year: String,
    pub danceability_range: PercentRange,
    pub energy_range: PercentRange,
    pub valence_range: PercentRange,
}

impl FilterConfig {
    /// Whether any range facet is inverted (and will therefore hide every row).
    pub fn has_inverted_range(&self) -> bool {
        self.danceability_range.is_inverted()
            || self.energy_range.is_inverted()
            || self.valence_range.is_inverted()
    }
}

// ---------------------------------------------------------------------------
// Predicate evaluation
// ---------------------------------------------------------------------------

/// Whether `track` passes every facet of `config`.
pub fn matches(track: &TrackRecord, config: &FilterConfig) -> bool {
    matches_search(track, &config.search_term)
        && matches_artist(track, &config.selected_artist)
        && matches_year(track, &config.selected_year)
        && config.danceability_range.contains(track.danceability_percent)
        && config.energy_range.contains(track.energy_percent)
        && config.valence_range.contains(track.valence_percent)
}

fn matches_search(track: &TrackRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    track.track_name.to_lowercase().contains(&term)
        || track.artist_name.to_lowercase().contains(&term)
}

/// Substring, not equality, so a multi-artist field matches any of its names.
fn matches_artist(track: &TrackRecord, artist: &str) -> bool {
    artist.is_empty() || track.artist_name.contains(artist)
}

fn matches_year(track: &TrackRecord, year: &str) -> bool {
    year.is_empty() || track.year_label() == year
}

/// Return the tracks that pass `config`, in input order.
pub fn apply_filter<'a>(tracks: &'a [TrackRecord], config: &FilterConfig) -> Vec<&'a TrackRecord> {
    tracks.iter().filter(|t| matches(t, config)).collect()
}

/// Return indices of tracks that pass `config`.
pub fn filtered_indices(tracks: &[TrackRecord], config: &FilterConfig) -> Vec<usize> {
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| matches(t, config))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artist: &str, year: f64, dance: f64, energy: f64, valence: f64) -> TrackRecord {
        TrackRecord {
            track_name: name.to_string(),
            artist_name: artist.to_string(),
            released_year: year,
            danceability_percent: dance,
            energy_percent: energy,
            valence_percent: valence,
            ..Default::default()
        }
    }

    fn sample() -> Vec<TrackRecord> {
        vec![
            track("Flowers", "Miley Cyrus", 2023.0, 71.0, 68.0, 65.0),
            track("Kill Bill", "SZA", 2022.0, 64.0, 73.0, 43.0),
            track("Ella Baila Sola", "Eslabon Armado, Peso Pluma", 2023.0, 67.0, 76.0, 83.0),
            track("Quiet Song", "Nobody", 2019.0, 10.0, 5.0, 20.0),
        ]
    }

    #[test]
    fn test_default_config_keeps_everything_in_order() {
        let tracks = sample();
        let out = apply_filter(&tracks, &FilterConfig::default());
        assert_eq!(out.len(), tracks.len());
        for (a, b) in out.iter().zip(tracks.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_artist() {
        let tracks = sample();
        let config = FilterConfig {
            search_term: "kILL".to_string(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&tracks, &config), vec![1]);

        let config = FilterConfig {
            search_term: "peso".to_string(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&tracks, &config), vec![2]);
    }

    #[test]
    fn test_artist_matches_substring_of_multi_artist_field() {
        let tracks = sample();
        let config = FilterConfig {
            selected_artist: "Peso Pluma".to_string(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&tracks, &config), vec![2]);

        // case-sensitive, unlike search
        let config = FilterConfig {
            selected_artist: "sza".to_string(),
            ..Default::default()
        };
        assert!(filtered_indices(&tracks, &config).is_empty());
    }

    #[test]
    fn test_year_matches_exact_text() {
        let tracks = sample();
        let config = FilterConfig {
            selected_year: "2023".to_string(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&tracks, &config), vec![0, 2]);

        let config = FilterConfig {
            selected_year: "202".to_string(),
            ..Default::default()
        };
        assert!(filtered_indices(&tracks, &config).is_empty());
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let tracks = sample();
        let config = FilterConfig {
            danceability_range: PercentRange::new(64.0, 71.0),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&tracks, &config), vec![0, 1, 2]);

        let config = FilterConfig {
            energy_range: PercentRange::new(70.0, 100.0),
            valence_range: PercentRange::new(0.0, 50.0),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&tracks, &config), vec![1]);
    }

    #[test]
    fn test_inverted_range_yields_empty() {
        let tracks = sample();
        for config in [
            FilterConfig {
                danceability_range: PercentRange::new(80.0, 20.0),
                ..Default::default()
            },
            FilterConfig {
                energy_range: PercentRange::new(1.0, 0.0),
                ..Default::default()
            },
            FilterConfig {
                valence_range: PercentRange::new(100.0, 0.0),
                search_term: "flowers".to_string(),
                ..Default::default()
            },
        ] {
            assert!(config.has_inverted_range());
            assert!(apply_filter(&tracks, &config).is_empty());
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let tracks = sample();
        let config = FilterConfig {
            selected_year: "2023".to_string(),
            energy_range: PercentRange::new(70.0, 100.0),
            ..Default::default()
        };
        let once: Vec<TrackRecord> = apply_filter(&tracks, &config).into_iter().cloned().collect();
        let twice = apply_filter(&once, &config);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice[0].track_name, "Ella Baila Sola");
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: FilterConfig =
            serde_json::from_str(r#"{"selected_year":"2022","energy_range":{"low":10,"high":90}}"#).unwrap();
        assert_eq!(config.selected_year, "2022");
        assert_eq!(config.energy_range, PercentRange::new(10.0, 90.0));
        assert_eq!(config.danceability_range, PercentRange::default());
        assert!(config.search_term.is_empty());
    }
}
