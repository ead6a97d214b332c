use std::borrow::Borrow;

use serde::Serialize;

use super::group::{OrderedGroups, StreamTally};
use super::{round_half_up, rows};
use crate::data::model::{number_label, TrackRecord};

/// One point of the release-month trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// `"YYYY-MM"`.
    pub date: String,
    pub total_streams: f64,
    pub track_count: usize,
    pub average_streams: f64,
    pub average_in_millions: f64,
}

/// Bucket key for a track's release month. The month is zero-padded so the
/// keys sort chronologically as plain strings.
pub fn month_key(track: &TrackRecord) -> String {
    format!(
        "{}-{:0>2}",
        number_label(track.released_year),
        number_label(track.released_month)
    )
}

/// Average streams per release month, oldest first, keeping only the most
/// recent `window` months.
pub fn stream_trend<R: Borrow<TrackRecord>>(tracks: &[R], window: usize) -> Vec<TrendPoint> {
    let mut groups: OrderedGroups<StreamTally> = OrderedGroups::new();
    for track in rows(tracks) {
        groups.entry(&month_key(track)).add(track.streams);
    }

    let mut buckets = groups.into_vec();
    buckets.sort_by(|a, b| a.0.cmp(&b.0));
    if buckets.len() > window {
        let dropped = buckets.len() - window;
        log::debug!("Trend keeps {window} months, dropping {dropped} oldest");
        buckets.drain(..dropped);
    }

    buckets
        .into_iter()
        .map(|(date, tally)| {
            let average = tally.average();
            TrendPoint {
                date,
                total_streams: tally.total_streams,
                track_count: tally.track_count,
                average_streams: round_half_up(average),
                average_in_millions: round_half_up(average / 1_000_000.0),
            }
        })
        .collect()
}
