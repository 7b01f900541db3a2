use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::data::SyncError;
use crate::data::provider::{LottoDataProvider, ProviderDraw};

/// Scripted provider for coordinator and session tests: serves one canned
/// EuroMillions-shaped draw plus a 3-entry history, and counts how many
/// request sequences were started.
pub(crate) struct MockProvider {
    sequences: AtomicUsize,
    delay: Duration,
    fail_with: Option<SyncError>,
    fail_history_with: Option<SyncError>,
    no_results: bool,
}

impl MockProvider {
    pub fn ok() -> Self {
        Self {
            sequences: AtomicUsize::new(0),
            delay: Duration::ZERO,
            fail_with: None,
            fail_history_with: None,
            no_results: false,
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::ok()
        }
    }

    pub fn failing(err: SyncError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::ok()
        }
    }

    pub fn with_failing_history(err: SyncError) -> Self {
        Self {
            fail_history_with: Some(err),
            ..Self::ok()
        }
    }

    pub fn without_results() -> Self {
        Self {
            no_results: true,
            ..Self::ok()
        }
    }

    pub fn sequences_started(&self) -> usize {
        self.sequences.load(Ordering::SeqCst)
    }

    fn row(results: Vec<u8>, date: &str) -> ProviderDraw {
        ProviderDraw {
            results,
            date: Some(date.to_string()),
        }
    }
}

#[async_trait]
impl LottoDataProvider for MockProvider {
    async fn draw_dates(&self, _code: &str) -> Result<Vec<String>, SyncError> {
        self.sequences.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(vec!["2026-08-28".to_string(), "2026-08-25".to_string()])
    }

    async fn draw_for_date(
        &self,
        _code: &str,
        date: &str,
    ) -> Result<Option<ProviderDraw>, SyncError> {
        if self.no_results {
            return Ok(None);
        }
        Ok(Some(Self::row(vec![11, 26, 29, 34, 44, 1, 10], date)))
    }

    async fn recent_draws(&self, _code: &str, _limit: usize) -> Result<Vec<ProviderDraw>, SyncError> {
        if let Some(err) = &self.fail_history_with {
            return Err(err.clone());
        }
        Ok(vec![
            Self::row(vec![11, 26, 29, 34, 44, 1, 10], "2026-08-28"),
            Self::row(vec![7, 11, 23, 40, 44, 2, 9], "2026-08-25"),
            Self::row(vec![3, 11, 29, 38, 44, 5, 6], "2026-08-21"),
        ])
    }
}
