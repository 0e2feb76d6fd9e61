#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod report;
pub mod utils;

// The engine
pub mod engine;

// Re-export commonly used types
pub use analysis::{
    CorrelationMatrix, Statistics, build_correlation_matrix, compute_correlation,
    compute_statistics, correlation_to_color,
};
pub use data::{FetchError, MockPriceSource, PriceDataSource, fetch_all, fetch_single};
pub use domain::{PriceSeries, RgbColor, Sample, TickerRegistry};
pub use engine::{HeatmapEngine, HeatmapSnapshot};

use config::{MOCK_FEED, WINDOW};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Time window to fetch, in minutes (clamped to the slider range)
    #[arg(long, default_value_t = WINDOW.default_minutes)]
    pub minutes: usize,

    /// Also show the single-stock view for this symbol
    #[arg(long)]
    pub ticker: Option<String>,

    /// Print the snapshot as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Seed the mock feed for reproducible prices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated latency per fetch
    #[arg(long, default_value_t = MOCK_FEED.latency_ms)]
    pub latency_ms: u64,
}
