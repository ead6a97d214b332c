use std::io::Write;

use track_analytics::charts::comparison::{SelectionChange, TrackSelection};
use track_analytics::charts::{artists, bubble, build_dashboard, distribution, ranking, trend};
use track_analytics::config::{ChartLimits, DashboardConfig};
use track_analytics::data::filter::{apply_filter, FilterConfig, PercentRange};
use track_analytics::data::loader::{load_file, parse_tracks};
use track_analytics::state::DashboardState;

const HEADER: &str = "track_name,artist(s)_name,artist_count,released_year,released_month,released_day,in_spotify_playlists,in_spotify_charts,streams,in_apple_playlists,in_apple_charts,in_deezer_playlists,in_deezer_charts,in_shazam_charts,bpm,key,mode,danceability_%,valence_%,energy_%,acousticness_%,instrumentalness_%,liveness_%,speechiness_%";

fn sample_csv() -> String {
    let rows = [
        "Flowers,Miley Cyrus,1,2023,1,12,\"12,211\",115,\"1,316,855,716\",300,215,745,58,\"1,021\",118,,Major,71,65,68,6,0,3,7",
        "Kill Bill,SZA,1,2022,12,8,\"8,109\",77,\"1,163,093,654\",183,162,161,12,187,89,G#,Major,64,43,73,5,17,16,4",
        "Ella Baila Sola,\"Eslabon Armado, Peso Pluma\",2,2023,3,16,\"3,090\",50,\"725,980,112\",34,222,43,13,418,148,F,Minor,67,83,76,48,0,8,3",
        "",
        "Broken Row,,,,,,,,not a number,,,,,,,,,,,,,,,",
        "Cruel Summer,Taylor Swift,1,2019,8,23,\"7,858\",100,\"800,840,817\",116,116,125,11,264,170,,Major,55,58,72,11,0,11,15",
    ];
    format!("{HEADER}\n{}\n", rows.join("\n"))
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_file_from_disk() {
    let file = write_temp(&sample_csv());
    let ds = load_file(file.path()).unwrap();
    assert_eq!(ds.len(), 5);
    assert_eq!(ds.tracks[0].streams, 1_316_855_716.0);
    assert_eq!(ds.tracks[3].track_name, "Broken Row");
    assert_eq!(ds.tracks[3].streams, 0.0);
    assert_eq!(ds.year_options()[0], "2023");
}

#[test]
fn test_load_file_rejects_non_utf8() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
    assert!(load_file(file.path()).is_err());
}

#[test]
fn test_header_only_file() {
    let file = write_temp(&format!("{HEADER}\n"));
    let ds = load_file(file.path()).unwrap();
    assert!(ds.is_empty());
}

#[test]
fn test_full_pipeline() {
    let tracks = parse_tracks(&sample_csv());
    let config = FilterConfig {
        energy_range: PercentRange::new(70.0, 100.0),
        ..Default::default()
    };
    let view = apply_filter(&tracks, &config);
    let names: Vec<&str> = view.iter().map(|t| t.track_name.as_str()).collect();
    assert_eq!(names, vec!["Kill Bill", "Ella Baila Sola", "Cruel Summer"]);

    let top = ranking::top_tracks(&view, 2);
    assert_eq!(top[0].track_name, "Kill Bill");
    assert_eq!(top[0].streams_in_millions, 1163.0);
    assert_eq!(top[1].track_name, "Cruel Summer");

    let artists = artists::top_artists(&view, 10);
    let artist_names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(artist_names, vec!["SZA", "Taylor Swift", "Eslabon Armado", "Peso Pluma"]);
    assert_eq!(artists[0].streams_in_billions, 1.16);

    let modes = distribution::mode_distribution(&view);
    assert_eq!(modes[0].name, "Major");
    assert_eq!(modes[0].percentage, 66.7);
    assert_eq!(modes[1].percentage, 33.3);

    let points = trend::stream_trend(&view, 24);
    let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2019-08", "2022-12", "2023-03"]);

    let chart = bubble::bubble_chart(&view, 50);
    assert_eq!(chart.points.len(), 3);
    assert_eq!(chart.x_domain.unwrap().min, 72.0);
}

#[test]
fn test_broken_row_survives_default_filters() {
    let tracks = parse_tracks(&sample_csv());
    let view = apply_filter(&tracks, &FilterConfig::default());
    assert_eq!(view.len(), tracks.len());

    // the broken row has no features, so it never becomes a bubble
    let chart = bubble::bubble_chart(&view, 50);
    assert!(chart.points.iter().all(|p| p.track_name != "Broken Row"));

    let modes = distribution::mode_distribution(&view);
    let unknown = modes.iter().find(|m| m.name == "Unknown").unwrap();
    assert_eq!(unknown.count, 1);
    assert_eq!(unknown.percentage, 20.0);
}

#[test]
fn test_inverted_range_empties_every_chart() {
    let tracks = parse_tracks(&sample_csv());
    let config = FilterConfig {
        search_term: "a".to_string(),
        valence_range: PercentRange::new(90.0, 10.0),
        ..Default::default()
    };
    let view = apply_filter(&tracks, &config);
    assert!(view.is_empty());

    let snap = build_dashboard(&view, &TrackSelection::default(), &ChartLimits::default());
    assert_eq!(snap.summary.total_tracks, 0);
    assert_eq!(snap.summary.average_streams, 0.0);
    assert!(snap.top_tracks.is_empty());
    assert!(snap.mode_distribution.is_empty());
    assert!(snap.feature_comparison.iter().all(|row| row.series.is_empty()));
}

#[test]
fn test_session_end_to_end() {
    let file = write_temp(&sample_csv());
    let config = DashboardConfig::from_json_str(r#"{"filters":{"selected_year":"2023"}}"#).unwrap();
    let mut state = DashboardState::new(config);
    assert!(state.load_file(file.path()));
    assert_eq!(state.visible_indices, vec![0, 2]);

    assert_eq!(state.toggle_track("Ella Baila Sola"), SelectionChange::Added);
    let snap = state.snapshot().unwrap();
    assert_eq!(snap.comparison_candidates, vec!["Flowers", "Ella Baila Sola"]);
    let danceability = &snap.feature_comparison[0];
    assert_eq!(danceability.series.len(), 1);
    assert_eq!(danceability.series[0].value, 67.0);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["top_tracks"][0]["track_name"], "Flowers");
    assert_eq!(json["feature_comparison"][0]["feature"], "danceability");
}
