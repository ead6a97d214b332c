use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use track_analytics::config::DashboardConfig;
use track_analytics::data::loader;
use track_analytics::state::DashboardState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Filter a tracks CSV and print every chart as JSON", long_about = None)]
struct Args {
    /// Tracks CSV with a header row
    csv: PathBuf,

    /// JSON file with chart limits and initial filters
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    let dataset = loader::load_file(&args.csv)?;
    let mut state = DashboardState::new(config);
    state.set_dataset(dataset);

    let snapshot = state.snapshot().context("no dataset loaded")?;
    log::info!(
        "{} of {} tracks visible",
        state.visible_indices.len(),
        state.dataset.as_ref().map_or(0, |ds| ds.len())
    );
    let json = serde_json::to_string_pretty(&snapshot).context("serializing dashboard")?;
    println!("{json}");
    Ok(())
}
