use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use super::model::{TrackDataset, TrackRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a tracks CSV from disk and build the dataset.
///
/// This is the only fallible step of the pipeline: the file must exist and
/// be valid UTF-8. Anything wrong *inside* the file degrades to defaults.
pub fn load_file(path: &Path) -> Result<TrackDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading tracks CSV {}", path.display()))?;
    let tracks = parse_tracks(&text);
    log::info!("Parsed {} tracks from {}", tracks.len(), path.display());
    Ok(TrackDataset::from_tracks(tracks))
}

/// Parse raw CSV text (header row first) into track records.
///
/// One record per non-blank data row, in source order. Cells are coerced
/// independently: a malformed cell becomes `0.0` or `""`, never an error.
pub fn parse_tracks(text: &str) -> Vec<TrackRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => ColumnIndex::new(headers),
        Err(e) => {
            log::warn!("Unreadable CSV header, no tracks imported: {e}");
            return Vec::new();
        }
    };

    let mut tracks = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        match result {
            Ok(row) => tracks.push(columns.track(&row)),
            Err(e) => log::warn!("Skipping undecodable CSV row {row_no}: {e}"),
        }
    }
    log::debug!("Normalized {} track rows", tracks.len());
    tracks
}

// ---------------------------------------------------------------------------
// Header mapping
// ---------------------------------------------------------------------------

/// Column-name → position lookup for one CSV header row.
struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.to_string(), i))
            .collect();
        ColumnIndex { positions }
    }

    fn text(&self, row: &StringRecord, column: &str) -> String {
        self.positions
            .get(column)
            .and_then(|&i| row.get(i))
            .unwrap_or("")
            .to_string()
    }

    fn number(&self, row: &StringRecord, column: &str) -> f64 {
        self.positions
            .get(column)
            .and_then(|&i| row.get(i))
            .map(coerce_number)
            .unwrap_or(0.0)
    }

    fn track(&self, row: &StringRecord) -> TrackRecord {
        TrackRecord {
            track_name: self.text(row, "track_name"),
            artist_name: self.text(row, "artist(s)_name"),
            artist_count: self.number(row, "artist_count"),
            released_year: self.number(row, "released_year"),
            released_month: self.number(row, "released_month"),
            released_day: self.number(row, "released_day"),
            in_spotify_playlists: self.number(row, "in_spotify_playlists"),
            in_spotify_charts: self.number(row, "in_spotify_charts"),
            streams: self.number(row, "streams"),
            in_apple_playlists: self.number(row, "in_apple_playlists"),
            in_apple_charts: self.number(row, "in_apple_charts"),
            in_deezer_playlists: self.number(row, "in_deezer_playlists"),
            in_deezer_charts: self.number(row, "in_deezer_charts"),
            in_shazam_charts: self.number(row, "in_shazam_charts"),
            bpm: self.number(row, "bpm"),
            key: self.text(row, "key"),
            mode: self.text(row, "mode"),
            danceability_percent: self.number(row, "danceability_%"),
            valence_percent: self.number(row, "valence_%"),
            energy_percent: self.number(row, "energy_%"),
            acousticness_percent: self.number(row, "acousticness_%"),
            instrumentalness_percent: self.number(row, "instrumentalness_%"),
            liveness_percent: self.number(row, "liveness_%"),
            speechiness_percent: self.number(row, "speechiness_%"),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

/// Coerce a raw cell into a number.
///
/// Thousands separators and quote characters are stripped, then the longest
/// leading decimal literal is parsed (`"12abc"` → 12). Empty or unreadable
/// cells yield `0.0`.
pub fn coerce_number(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '"').collect();
    let value = leading_float(cleaned.trim_start()).unwrap_or(0.0);
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Parse the longest prefix of `s` that forms a decimal float literal.
fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
