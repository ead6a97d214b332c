use std::borrow::Borrow;

use serde::Serialize;

use super::rows;
use crate::data::model::TrackRecord;

/// Default number of bubbles drawn.
pub const DEFAULT_BUBBLE_CAP: usize = 50;

/// Observed `[min, max]` of one attribute across the plotted points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// `None` when `values` is empty.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Extent> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(e) => Some(Extent {
                min: e.min.min(v),
                max: e.max.max(v),
            }),
        })
    }
}

/// One bubble: energy on x, danceability on y, valence as colour, streams
/// as size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub streams: f64,
    pub track_name: String,
    pub artist_name: String,
}

/// Points plus the scale domains a renderer needs.
///
/// `size_domain` is meant for a square-root scale so bubble area tracks the
/// stream count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleChart {
    pub points: Vec<BubblePoint>,
    pub x_domain: Option<Extent>,
    pub y_domain: Option<Extent>,
    pub size_domain: Option<Extent>,
    pub color_domain: Option<Extent>,
}

/// Tracks whose energy, danceability and valence are all positive, capped
/// to the first `cap` in input order.
pub fn bubble_chart<R: Borrow<TrackRecord>>(tracks: &[R], cap: usize) -> BubbleChart {
    let points: Vec<BubblePoint> = rows(tracks)
        .filter(|t| t.energy_percent > 0.0 && t.danceability_percent > 0.0 && t.valence_percent > 0.0)
        .take(cap)
        .map(|t| BubblePoint {
            x: t.energy_percent,
            y: t.danceability_percent,
            z: t.valence_percent,
            streams: t.streams,
            track_name: t.track_name.clone(),
            artist_name: t.artist_name.clone(),
        })
        .collect();

    BubbleChart {
        x_domain: Extent::of(points.iter().map(|p| p.x)),
        y_domain: Extent::of(points.iter().map(|p| p.y)),
        size_domain: Extent::of(points.iter().map(|p| p.streams)),
        color_domain: Extent::of(points.iter().map(|p| p.z)),
        points,
    }
}
