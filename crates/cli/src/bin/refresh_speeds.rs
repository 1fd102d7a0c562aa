use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use galaxy_flight_duration::ships::{JsonFleetTable, RefreshOutcome, ShipSpeedCache};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Refresh the stored ship speeds from fleet data, at most once per day"
)]
struct Cli {
    /// Ship speed cache (JSON); created when missing
    #[arg(long)]
    cache: PathBuf,

    /// Fleet table (JSON object of ship id to speed)
    #[arg(long)]
    fleet: PathBuf,

    /// Day marker to refresh for (defaults to the local date)
    #[arg(long)]
    day: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let day = cli
        .day
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    let mut cache = ShipSpeedCache::load_json(&cli.cache)
        .with_context(|| format!("loading speed cache from {}", cli.cache.display()))?;
    let source = JsonFleetTable::new(&cli.fleet);

    match cache.refresh_if_stale(&day, &source) {
        RefreshOutcome::Refreshed => {
            cache
                .save_json(&cli.cache)
                .with_context(|| format!("saving speed cache to {}", cli.cache.display()))?;
            info!(day = %day, "ship speeds refreshed");
            println!("Refreshed ship speeds for {day}");
        }
        RefreshOutcome::AlreadyCurrent => {
            println!("Ship speeds already current for {day}");
        }
        RefreshOutcome::Skipped(err) => {
            warn!(%err, day = %day, "ship speed refresh skipped");
            println!("Ship speeds not refreshed: {err}");
        }
    }
    Ok(())
}
