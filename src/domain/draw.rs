use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One reported draw outcome: the player-picked main numbers plus whatever
/// secondary numbers the market defines (stars, reintegro, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub main: Vec<u8>,
    pub extras: Vec<u8>,
    pub date: Option<String>,
}

impl DrawRecord {
    pub fn new(main: Vec<u8>, extras: Vec<u8>, date: Option<String>) -> Self {
        Self { main, extras, date }
    }

    /// Split a flat provider results row into main and secondary numbers.
    /// The provider reports mains first, secondaries after.
    pub fn from_results(results: &[u8], main_count: usize, date: Option<String>) -> Self {
        let split = results.len().min(main_count);
        Self {
            main: results[..split].to_vec(),
            extras: results[split..].to_vec(),
            date,
        }
    }

    /// Render as `"11, 26, 29 | Stars: 1, 10"` for the dashboard.
    pub fn format(&self, extra_name: &str) -> String {
        let main = self.main.iter().join(", ");
        if self.extras.is_empty() {
            main
        } else {
            format!("{} | {}: {}", main, extra_name, self.extras.iter().join(", "))
        }
    }
}

/// How often a number appeared across a draw history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub num: u8,
    pub count: u32,
}
