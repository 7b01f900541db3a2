// Pure statistics and sampling over a market's draw history
pub mod prediction;
pub mod stats;

pub use prediction::{PredictionLine, generate_lines, suggested_lines};
pub use stats::{DrawStats, compute_stats};
