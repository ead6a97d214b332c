use std::path::Path;

use crate::charts::comparison::{SelectionChange, TrackSelection};
use crate::charts::{build_dashboard, DashboardSnapshot};
use crate::config::{ChartLimits, DashboardConfig};
use crate::data::filter::{filtered_indices, FilterConfig};
use crate::data::loader;
use crate::data::model::{TrackDataset, TrackRecord};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything one dashboard session holds, independent of rendering.
pub struct DashboardState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<TrackDataset>,

    /// Current filter facets.
    pub filters: FilterConfig,

    /// Indices of tracks passing the current filters.
    pub visible_indices: Vec<usize>,

    /// Tracks picked for the feature comparison.
    pub selection: TrackSelection,

    pub limits: ChartLimits,

    /// Status / error message for the UI.
    pub status_message: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            dataset: None,
            filters: config.filters,
            visible_indices: Vec::new(),
            selection: TrackSelection::new(config.limits.max_compared_tracks),
            limits: config.limits,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and apply the current filters to it.
    pub fn set_dataset(&mut self, dataset: TrackDataset) {
        self.dataset = Some(dataset);
        self.selection.clear();
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` from the full dataset.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(&ds.tracks, &self.filters),
            None => Vec::new(),
        };
        log::debug!("{} tracks visible after filtering", self.visible_indices.len());
    }

    /// Replace the filters wholesale.
    pub fn set_filters(&mut self, filters: FilterConfig) {
        self.filters = filters;
        self.refilter();
    }

    /// Edit the filters in place, then refilter.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut FilterConfig)) {
        edit(&mut self.filters);
        self.refilter();
    }

    /// Reset every facet to "show everything".
    pub fn clear_filters(&mut self) {
        self.set_filters(FilterConfig::default());
    }

    /// Toggle a track in the comparison selection.
    pub fn toggle_track(&mut self, name: &str) -> SelectionChange {
        self.selection.toggle(name)
    }

    /// The filtered view, in dataset order.
    pub fn visible_tracks(&self) -> Vec<&TrackRecord> {
        match &self.dataset {
            Some(ds) => self
                .visible_indices
                .iter()
                .filter_map(|&i| ds.tracks.get(i))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Artist picker entries for the loaded dataset.
    pub fn artist_options(&self) -> Vec<&str> {
        self.dataset
            .as_ref()
            .map(|ds| ds.artist_options(self.limits.artist_options))
            .unwrap_or_default()
    }

    /// All charts for the current view, or `None` before a dataset is loaded.
    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        self.dataset.as_ref()?;
        Some(build_dashboard(&self.visible_tracks(), &self.selection, &self.limits))
    }

    /// Load a CSV from disk, recording failures in `status_message`.
    pub fn load_file(&mut self, path: &Path) -> bool {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} tracks ({} distinct artist fields)",
                    dataset.len(),
                    dataset.artists.len()
                );
                self.set_dataset(dataset);
                true
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                false
            }
        }
    }
}
