/// REST constraints for the draw-data provider: endpoint, required headers
/// and client timeouts.
pub struct ProviderConfig {
    pub base_url: &'static str,
    pub host_header: &'static str,
    pub api_key_env: &'static str,
    pub timeout_ms: u64,
}

/// A key left at this value counts as not configured.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_KEY_HERE";

pub const PROVIDER: ProviderConfig = ProviderConfig {
    base_url: "https://european-lottery-api.p.rapidapi.com",
    host_header: "european-lottery-api.p.rapidapi.com",
    api_key_env: "LOTTERY_API_KEY",
    timeout_ms: 5000,
};
