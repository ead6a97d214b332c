//! Track analytics: CSV normalization, six-facet filtering and chart
//! aggregation for streaming-track datasets.
//!
//! ```text
//!  raw CSV ─▶ data::loader ─▶ TrackDataset ─▶ data::filter ─▶ charts::* ─▶ renderer
//! ```
//!
//! [`state::DashboardState`] ties the steps together for one session.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
