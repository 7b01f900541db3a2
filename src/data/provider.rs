use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::{API_KEY_PLACEHOLDER, PROVIDER, ProviderConfig};
use crate::data::SyncError;

/// One provider-reported outcome row: flat results (mains first, secondaries
/// after) plus the draw date. Missing fields deserialize to empty, which the
/// coordinator treats as "no update" rather than an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderDraw {
    #[serde(default)]
    pub results: Vec<u8>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Abstract interface for the external draw-data provider.
#[async_trait]
pub trait LottoDataProvider: Send + Sync {
    /// Known draw dates for a market, most recent first.
    async fn draw_dates(&self, code: &str) -> Result<Vec<String>, SyncError>;

    /// The draw published for a specific date, if the provider has one.
    async fn draw_for_date(&self, code: &str, date: &str)
    -> Result<Option<ProviderDraw>, SyncError>;

    /// Most recent draws, newest first, capped at `limit`.
    async fn recent_draws(&self, code: &str, limit: usize) -> Result<Vec<ProviderDraw>, SyncError>;
}

/// Live provider speaking the RapidAPI lottery protocol.
pub struct RapidApiProvider {
    client: reqwest::Client,
    config: &'static ProviderConfig,
    base_url: String,
    api_key: Option<String>,
}

impl RapidApiProvider {
    /// Build a client with the credential taken from the environment. A
    /// missing key is not an error here: it surfaces as a configuration
    /// error on the first synchronization attempt instead.
    pub fn from_env() -> Result<Self> {
        Self::with_key(std::env::var(PROVIDER.api_key_env).ok())
    }

    pub fn with_key(api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(PROVIDER.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            config: &PROVIDER,
            base_url: PROVIDER.base_url.to_string(),
            api_key,
        })
    }

    #[cfg(test)]
    fn with_endpoint(base_url: String, api_key: &str) -> Self {
        let mut provider = Self::with_key(Some(api_key.to_string())).expect("client");
        provider.base_url = base_url;
        provider
    }

    fn api_key(&self) -> Result<&str, SyncError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() && key != API_KEY_PLACEHOLDER => Ok(key),
            _ => Err(SyncError::Configuration(format!(
                "No provider API key configured. Set {} to enable live syncing.",
                self.config.api_key_env
            ))),
        }
    }

    /// Issue one authenticated GET and classify the response by status.
    /// The credential check short-circuits before any network traffic.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SyncError> {
        let key = self.api_key()?;
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Host", self.config.host_header)
            .header("X-RapidAPI-Key", key)
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SyncError::RateLimited);
        }
        if status == StatusCode::FORBIDDEN {
            return Err(SyncError::Unauthorized);
        }
        if !status.is_success() {
            return Err(SyncError::Provider {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))
    }
}

#[async_trait]
impl LottoDataProvider for RapidApiProvider {
    async fn draw_dates(&self, code: &str) -> Result<Vec<String>, SyncError> {
        self.get_json(&format!("{}/dates", code)).await
    }

    async fn draw_for_date(
        &self,
        code: &str,
        date: &str,
    ) -> Result<Option<ProviderDraw>, SyncError> {
        let draw: ProviderDraw = self.get_json(&format!("{}/draw/{}", code, date)).await?;
        // A 2xx body without results means the provider has nothing yet.
        Ok((!draw.results.is_empty()).then_some(draw))
    }

    async fn recent_draws(&self, code: &str, limit: usize) -> Result<Vec<ProviderDraw>, SyncError> {
        let mut rows: Vec<ProviderDraw> = self
            .get_json(&format!("{}/results?limit={}", code, limit))
            .await?;
        rows.retain(|row| !row.results.is_empty());
        Ok(rows)
    }
}
