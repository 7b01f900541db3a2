//! Configuration module for the lotto-radar application.

mod markets;
mod provider;

// Public
pub mod constants;

// Re-export commonly used items
pub use markets::seed_markets;
pub use provider::{API_KEY_PLACEHOLDER, PROVIDER, ProviderConfig};
