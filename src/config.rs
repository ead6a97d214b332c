use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charts::bubble::DEFAULT_BUBBLE_CAP;
use crate::charts::comparison::DEFAULT_MAX_COMPARED;
use crate::data::filter::FilterConfig;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Chart limits
// ---------------------------------------------------------------------------

/// How many rows each chart keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLimits {
    pub top_tracks: usize,
    pub top_artists: usize,
    /// Size of the feature-comparison picker.
    pub comparison_candidates: usize,
    pub max_compared_tracks: usize,
    pub bubble_points: usize,
    /// Release months kept on the trend line.
    pub trend_window: usize,
    pub artist_options: usize,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            top_tracks: 10,
            top_artists: 10,
            comparison_candidates: 10,
            max_compared_tracks: DEFAULT_MAX_COMPARED,
            bubble_points: DEFAULT_BUBBLE_CAP,
            trend_window: 24,
            artist_options: 50,
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Chart limits plus the filters a session starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub limits: ChartLimits,
    pub filters: FilterConfig,
}

impl DashboardConfig {
    pub fn from_json_str(text: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Reject zero limits. Inverted filter ranges are allowed (they hide
    /// every track) but logged.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let limits = [
            ("top_tracks", self.limits.top_tracks),
            ("top_artists", self.limits.top_artists),
            ("comparison_candidates", self.limits.comparison_candidates),
            ("max_compared_tracks", self.limits.max_compared_tracks),
            ("bubble_points", self.limits.bubble_points),
            ("trend_window", self.limits.trend_window),
            ("artist_options", self.limits.artist_options),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, v)| *v == 0) {
            return Err(DashboardError::Config(format!("limit `{name}` must be at least 1")));
        }

        if self.filters.has_inverted_range() {
            log::warn!("Initial filters contain an inverted range; no track will match");
        }
        Ok(())
    }
}
