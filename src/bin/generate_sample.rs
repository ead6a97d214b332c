use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Write a synthetic tracks CSV", long_about = None)]
struct Args {
    /// Output CSV path
    #[arg(default_value = "sample_tracks.csv")]
    out: PathBuf,

    /// Number of tracks to generate
    #[arg(short = 'n', long, default_value_t = 400)]
    tracks: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const HEADER: [&str; 24] = [
    "track_name",
    "artist(s)_name",
    "artist_count",
    "released_year",
    "released_month",
    "released_day",
    "in_spotify_playlists",
    "in_spotify_charts",
    "streams",
    "in_apple_playlists",
    "in_apple_charts",
    "in_deezer_playlists",
    "in_deezer_charts",
    "in_shazam_charts",
    "bpm",
    "key",
    "mode",
    "danceability_%",
    "valence_%",
    "energy_%",
    "acousticness_%",
    "instrumentalness_%",
    "liveness_%",
    "speechiness_%",
];

const ARTISTS: [&str; 12] = [
    "Nova Lane",
    "The Paper Kites",
    "Ruiz",
    "Miko Tan",
    "Lumen",
    "DJ Arcadia",
    "Saffron Hill",
    "Kaito",
    "Velvet Static",
    "Orla May",
    "Bronze Age",
    "Tiny Planets",
];

const WORDS: [&str; 14] = [
    "Midnight", "Golden", "Echo", "Paper", "River", "Neon", "Summer", "Ghost", "Velvet", "Fire",
    "Heart", "City", "Dream", "Static",
];

const KEYS: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Minimal deterministic PRNG (splitmix64).
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.next_u64() as usize % items.len()]
    }
}

/// Format with thousands separators, the way the source dataset quotes
/// large counts.
fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let out_path = args.out;
    let n_tracks = args.tracks;

    let mut rng = SampleRng(args.seed);
    let mut writer = csv::Writer::from_path(&out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    writer.write_record(HEADER).context("writing header")?;

    for i in 0..n_tracks {
        let title = format!("{} {}", rng.pick(&WORDS), rng.pick(&WORDS));
        let artist_count = if rng.range(0, 4) == 0 { 2 } else { 1 };
        let artists = (0..artist_count)
            .map(|_| rng.pick(&ARTISTS))
            .collect::<Vec<_>>()
            .join(", ");

        let year = rng.range(2015, 2023);
        let streams = rng.range(5_000_000, 3_500_000_000);
        let mode = match rng.range(0, 20) {
            0 => "",
            1..=11 => "Major",
            _ => "Minor",
        };
        let key = if rng.range(0, 9) == 0 { "" } else { rng.pick(&KEYS) };

        let row: Vec<String> = vec![
            title,
            artists,
            artist_count.to_string(),
            year.to_string(),
            rng.range(1, 12).to_string(),
            rng.range(1, 28).to_string(),
            with_commas(rng.range(100, 52_000)),
            rng.range(0, 150).to_string(),
            with_commas(streams),
            rng.range(0, 650).to_string(),
            rng.range(0, 275).to_string(),
            with_commas(rng.range(0, 12_000)),
            rng.range(0, 50).to_string(),
            with_commas(rng.range(0, 1_500)),
            rng.range(65, 205).to_string(),
            key.to_string(),
            mode.to_string(),
            rng.range(20, 96).to_string(),
            rng.range(4, 97).to_string(),
            rng.range(10, 97).to_string(),
            rng.range(0, 97).to_string(),
            rng.range(0, 40).to_string(),
            rng.range(3, 90).to_string(),
            rng.range(2, 60).to_string(),
        ];
        writer
            .write_record(&row)
            .with_context(|| format!("writing row {i}"))?;
    }

    writer.flush().context("flushing CSV")?;
    log::info!("Wrote {n_tracks} tracks to {}", out_path.display());
    println!("Wrote {n_tracks} tracks to {}", out_path.display());
    Ok(())
}
