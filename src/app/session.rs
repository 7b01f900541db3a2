use tokio::task::JoinHandle;

use crate::analysis::{PredictionLine, suggested_lines};
use crate::data::{SyncCoordinator, SyncError, SyncOutcome};
use crate::domain::{Market, MarketId};
use crate::utils::format_clock_time;

/// The presentation-facing session: tracks the selected market, debounces
/// selection churn into scheduled synchronizations, and exposes the read
/// surface the dashboard renders from.
pub struct DashboardSession {
    coordinator: SyncCoordinator,
    selected: MarketId,
    pending: Option<JoinHandle<()>>,
}

impl DashboardSession {
    pub fn new(coordinator: SyncCoordinator) -> Self {
        Self {
            coordinator,
            selected: MarketId::EuroMillions,
            pending: None,
        }
    }

    pub fn selected(&self) -> MarketId {
        self.selected
    }

    pub fn coordinator(&self) -> &SyncCoordinator {
        &self.coordinator
    }

    /// Switch the dashboard to another market. Cancels any pending scheduled
    /// sync; schedules a fresh one after the debounce window unless the
    /// market already synced this session.
    pub async fn select_market(&mut self, id: MarketId) {
        self.cancel_pending();
        self.selected = id;

        if self.coordinator.is_cached(id).await {
            return;
        }

        let coordinator = self.coordinator.clone();
        let debounce = self.coordinator.timings().debounce;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if let Err(err) = coordinator.synchronize(id, false).await {
                log::warn!("Scheduled sync for {} failed: {}", id, err);
            }
        }));
    }

    /// Drop the scheduled synchronization, if one has not fired yet.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Manual refresh: runs immediately, optionally bypassing the cache.
    pub async fn refresh(&self, force: bool) -> Result<SyncOutcome, SyncError> {
        self.coordinator.synchronize(self.selected, force).await
    }

    /// Wait for the scheduled debounced sync (if any) to run to completion.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    pub async fn market(&self) -> Market {
        self.coordinator.market(self.selected).await
    }

    pub async fn is_syncing(&self) -> bool {
        self.coordinator.is_syncing().await
    }

    pub async fn last_error(&self) -> Option<String> {
        self.coordinator.last_error().await
    }

    /// Header clock string; `--:--` before the first successful sync.
    pub async fn last_updated(&self) -> String {
        match self.coordinator.last_synced_at_ms().await {
            Some(ms) => format_clock_time(ms),
            None => "--:--".to_string(),
        }
    }

    /// The current prediction batch for the selected market. Operates purely
    /// on the in-memory pools; never blocks on the provider.
    pub async fn prediction_batch(&self) -> Vec<PredictionLine> {
        suggested_lines(&self.market().await)
    }
}

impl Drop for DashboardSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
