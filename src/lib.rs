// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{DrawStats, PredictionLine, compute_stats, generate_lines, suggested_lines};
pub use app::DashboardSession;
pub use data::{RapidApiProvider, SyncCoordinator, SyncError, SyncOutcome};
pub use domain::{DrawRecord, Market, MarketId};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Market to display, e.g. "EuroMillions" or "UK Lotto"
    #[arg(long, default_value = "EuroMillions")]
    pub market: String,

    /// Bypass the session cache and force a fresh provider sync
    #[arg(long, default_value_t = false)]
    pub force: bool,

    /// Skip the provider entirely and render seed data only
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Seed for reproducible prediction lines
    #[arg(long)]
    pub seed: Option<u64>,

    /// How many prediction lines to generate
    #[arg(long, default_value_t = config::constants::SUGGESTED_LINE_COUNT)]
    pub lines: usize,
}
