use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::analysis::{DrawStats, compute_stats};
use crate::config::constants::{HISTORY_FETCH_LIMIT, MOST_DRAWN_DISPLAY_COUNT};
use crate::config::seed_markets;
use crate::data::SyncError;
use crate::data::provider::LottoDataProvider;
use crate::domain::{DrawRecord, Market, MarketId};
use crate::utils::now_timestamp_ms;

/// Everything a successful synchronization hands to the market record.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketUpdate {
    pub draw: DrawRecord,
    pub most_drawn: Vec<u8>,
    /// Recomputed when the provider returned a usable history; `None` keeps
    /// the market's prior statistics.
    pub stats: Option<DrawStats>,
    pub fetched_at_ms: i64,
}

/// What a `synchronize` call actually did.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Applied(MarketUpdate),
    /// Provider answered 2xx but had nothing usable; prior data retained.
    NoFreshData,
    /// Dropped: another synchronization is running somewhere in the session.
    AlreadyInFlight,
    /// Dropped: this market already synced this session and `force` was off.
    AlreadyCached,
}

/// Per-session synchronization state. Initialized empty at session start,
/// mutated only by `SyncCoordinator::synchronize`.
#[derive(Debug, Default)]
struct SyncState {
    in_flight: bool,
    synced: HashSet<MarketId>,
    last_synced_at_ms: Option<i64>,
    last_error: Option<String>,
}

struct CoordinatorInner {
    markets: HashMap<MarketId, Market>,
    state: SyncState,
}

/// Timing knobs, overridable so tests do not wait on wall-clock delays.
#[derive(Debug, Clone, Copy)]
pub struct SyncTimings {
    pub debounce: Duration,
    pub settle: Duration,
}

impl Default for SyncTimings {
    fn default() -> Self {
        Self {
            debounce: crate::config::constants::sync::DEBOUNCE_DELAY,
            settle: crate::config::constants::sync::SETTLE_DELAY,
        }
    }
}

/// Mediates between market selection and the draw-data provider. Owns the
/// market records and the session sync state; enforces one in-flight
/// synchronization across the whole session.
#[derive(Clone)]
pub struct SyncCoordinator {
    inner: Arc<Mutex<CoordinatorInner>>,
    provider: Arc<dyn LottoDataProvider>,
    timings: SyncTimings,
}

impl SyncCoordinator {
    pub fn new(provider: Arc<dyn LottoDataProvider>) -> Self {
        Self::with_timings(provider, SyncTimings::default())
    }

    pub fn with_timings(provider: Arc<dyn LottoDataProvider>, timings: SyncTimings) -> Self {
        let markets = seed_markets().into_iter().map(|m| (m.id, m)).collect();
        Self {
            inner: Arc::new(Mutex::new(CoordinatorInner {
                markets,
                state: SyncState::default(),
            })),
            provider,
            timings,
        }
    }

    pub fn timings(&self) -> SyncTimings {
        self.timings
    }

    /// Snapshot of a market record for display and prediction.
    pub async fn market(&self, id: MarketId) -> Market {
        let guard = self.inner.lock().await;
        guard
            .markets
            .get(&id)
            .expect("all markets seeded at session start")
            .clone()
    }

    pub async fn is_cached(&self, id: MarketId) -> bool {
        self.inner.lock().await.state.synced.contains(&id)
    }

    pub async fn is_syncing(&self) -> bool {
        self.inner.lock().await.state.in_flight
    }

    pub async fn last_error(&self) -> Option<String> {
        self.inner.lock().await.state.last_error.clone()
    }

    pub async fn last_synced_at_ms(&self) -> Option<i64> {
        self.inner.lock().await.state.last_synced_at_ms
    }

    /// Run one synchronization for `id`. Dropped outright while any sync is
    /// in flight, or when the market already synced this session (unless
    /// `force`). On failure the market record is left untouched and the
    /// error text lands in `last_error` for the banner.
    pub async fn synchronize(&self, id: MarketId, force: bool) -> Result<SyncOutcome, SyncError> {
        let (code, main_count) = {
            let mut guard = self.inner.lock().await;
            if guard.state.in_flight {
                return Ok(SyncOutcome::AlreadyInFlight);
            }
            if !force && guard.state.synced.contains(&id) {
                return Ok(SyncOutcome::AlreadyCached);
            }
            guard.state.in_flight = true;
            guard.state.last_error = None;

            let market = guard
                .markets
                .get(&id)
                .expect("all markets seeded at session start");
            (market.code, market.main_count)
        };

        let result = self.fetch_update(code, main_count).await;

        let mut guard = self.inner.lock().await;
        let outcome = match result {
            Ok(Some(update)) => {
                let market = guard
                    .markets
                    .get_mut(&id)
                    .expect("all markets seeded at session start");
                apply_update(market, &update);
                guard.state.synced.insert(id);
                guard.state.last_synced_at_ms = Some(update.fetched_at_ms);
                #[cfg(debug_assertions)]
                log::info!("SYNC [{}]: applied update for draw {:?}.", id, update.draw.date);
                Ok(SyncOutcome::Applied(update))
            }
            Ok(None) => {
                // Nothing usable. Keep prior data, refresh the clock, and
                // leave the cache bit unset so the next selection retries.
                guard.state.last_synced_at_ms = Some(now_timestamp_ms());
                Ok(SyncOutcome::NoFreshData)
            }
            Err(err) => {
                log::warn!("SYNC [{}] failed: {}", id, err);
                guard.state.last_error = Some(err.to_string());
                Err(err)
            }
        };

        if matches!(outcome, Err(SyncError::Configuration(_))) {
            // Credential problems resolve instantly; there was no traffic to
            // settle from.
            guard.state.in_flight = false;
        } else {
            drop(guard);
            let inner = Arc::clone(&self.inner);
            let settle = self.timings.settle;
            tokio::spawn(async move {
                tokio::time::sleep(settle).await;
                inner.lock().await.state.in_flight = false;
            });
        }

        outcome
    }

    /// The strictly ordered provider request sequence: resolve the latest
    /// draw date, fetch that draw, then pull history for the stats engine.
    async fn fetch_update(
        &self,
        code: &'static str,
        main_count: usize,
    ) -> Result<Option<MarketUpdate>, SyncError> {
        let dates = self.provider.draw_dates(code).await?;
        let Some(latest) = dates.first() else {
            #[cfg(debug_assertions)]
            log::info!("SYNC [{}]: provider reported no draw dates.", code);
            return Ok(None);
        };

        let Some(draw) = self.provider.draw_for_date(code, latest).await? else {
            return Ok(None);
        };
        if draw.results.is_empty() {
            return Ok(None);
        }

        // The draw is already in hand at this point; a history problem only
        // costs the statistics refresh, never the draw itself.
        let stats = match self.provider.recent_draws(code, HISTORY_FETCH_LIMIT).await {
            Ok(history) => {
                let records: Vec<DrawRecord> = history
                    .iter()
                    .map(|row| DrawRecord::from_results(&row.results, main_count, row.date.clone()))
                    .collect();
                (!records.is_empty()).then(|| compute_stats(&records, main_count))
            }
            Err(err) => {
                log::warn!(
                    "SYNC [{}]: history fetch failed ({}); keeping prior statistics.",
                    code,
                    err
                );
                None
            }
        };

        let most_drawn = draw
            .results
            .iter()
            .copied()
            .take(MOST_DRAWN_DISPLAY_COUNT)
            .collect();

        Ok(Some(MarketUpdate {
            draw: DrawRecord::from_results(&draw.results, main_count, draw.date.clone()),
            most_drawn,
            stats,
            fetched_at_ms: now_timestamp_ms(),
        }))
    }
}

/// Replace the market's live fields from one update, all inside the caller's
/// lock region so readers never observe a half-applied sync.
fn apply_update(market: &mut Market, update: &MarketUpdate) {
    market.most_drawn = update.most_drawn.clone();
    market.last_draw = update.draw.clone();
    if let Some(stats) = &update.stats {
        market.hot = stats.hot.clone();
        market.cold = stats.cold.clone();
        market.overdue = stats.overdue.clone();
        market.frequency = stats.frequency.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::MockProvider;

    fn fast() -> SyncTimings {
        SyncTimings {
            debounce: Duration::ZERO,
            settle: Duration::from_millis(10),
        }
    }

    async fn wait_settle(coordinator: &SyncCoordinator) {
        tokio::time::sleep(coordinator.timings().settle + Duration::from_millis(30)).await;
    }

    #[tokio::test]
    async fn second_call_hits_the_session_cache() {
        let provider = Arc::new(MockProvider::ok());
        let coordinator = SyncCoordinator::with_timings(provider.clone(), fast());

        let first = coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .expect("first sync");
        assert!(matches!(first, SyncOutcome::Applied(_)));

        wait_settle(&coordinator).await;

        let second = coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .expect("second sync");
        assert_eq!(second, SyncOutcome::AlreadyCached);
        assert_eq!(provider.sequences_started(), 1);
    }

    #[tokio::test]
    async fn concurrent_call_is_dropped_while_in_flight() {
        let provider = Arc::new(MockProvider::slow(Duration::from_millis(150)));
        let coordinator = SyncCoordinator::with_timings(provider.clone(), fast());

        let background = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move { coordinator.synchronize(MarketId::EuroMillions, false).await })
        };
        tokio::time::sleep(Duration::from_millis(30)).await;

        let overlapping = coordinator
            .synchronize(MarketId::UkLotto, false)
            .await
            .expect("overlapping call");
        assert_eq!(overlapping, SyncOutcome::AlreadyInFlight);

        let first = background.await.expect("join").expect("first sync");
        assert!(matches!(first, SyncOutcome::Applied(_)));
        assert_eq!(provider.sequences_started(), 1);
    }

    #[tokio::test]
    async fn force_bypasses_the_cache() {
        let provider = Arc::new(MockProvider::ok());
        let coordinator = SyncCoordinator::with_timings(provider.clone(), fast());

        coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .expect("first sync");
        wait_settle(&coordinator).await;

        let forced = coordinator
            .synchronize(MarketId::EuroMillions, true)
            .await
            .expect("forced sync");
        assert!(matches!(forced, SyncOutcome::Applied(_)));
        assert_eq!(provider.sequences_started(), 2);
    }

    #[tokio::test]
    async fn applied_update_recomputes_stats() {
        let provider = Arc::new(MockProvider::ok());
        let coordinator = SyncCoordinator::with_timings(provider, fast());

        coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .expect("sync");

        let market = coordinator.market(MarketId::EuroMillions).await;
        // 11 and 44 appear in all three history entries served by the mock.
        assert_eq!(market.hot[0], 11);
        assert_eq!(market.hot[1], 44);
        assert_eq!(market.most_drawn, vec![11, 26, 29, 34, 44]);
        assert_eq!(market.last_draw.main, vec![11, 26, 29, 34, 44]);
        assert_eq!(market.last_draw.extras, vec![1, 10]);
        assert!(coordinator.is_cached(MarketId::EuroMillions).await);
        assert!(coordinator.last_synced_at_ms().await.is_some());
        assert!(coordinator.last_error().await.is_none());
    }

    #[tokio::test]
    async fn history_failure_still_applies_the_draw() {
        let provider = Arc::new(MockProvider::with_failing_history(SyncError::Transport(
            "connection reset".to_string(),
        )));
        let coordinator = SyncCoordinator::with_timings(provider, fast());

        let before = coordinator.market(MarketId::EuroMillions).await;
        let outcome = coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .expect("sync should tolerate a history failure");

        let SyncOutcome::Applied(update) = outcome else {
            panic!("expected an applied update, got {:?}", outcome);
        };
        assert!(update.stats.is_none());

        let after = coordinator.market(MarketId::EuroMillions).await;
        assert_eq!(after.last_draw.main, vec![11, 26, 29, 34, 44]);
        assert_eq!(after.last_draw.extras, vec![1, 10]);
        // Statistics keep their seed values when history is unavailable.
        assert_eq!(after.hot, before.hot);
        assert_eq!(after.frequency, before.frequency);
        assert!(coordinator.is_cached(MarketId::EuroMillions).await);
        assert!(coordinator.last_error().await.is_none());
    }

    #[tokio::test]
    async fn rate_limit_keeps_prior_data_and_mentions_waiting() {
        let provider = Arc::new(MockProvider::failing(SyncError::RateLimited));
        let coordinator = SyncCoordinator::with_timings(provider, fast());

        let before = coordinator.market(MarketId::EuroMillions).await;
        let err = coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .unwrap_err();
        assert_eq!(err, SyncError::RateLimited);

        let after = coordinator.market(MarketId::EuroMillions).await;
        assert_eq!(before, after);
        assert!(!coordinator.is_cached(MarketId::EuroMillions).await);

        let banner = coordinator.last_error().await.expect("error recorded");
        assert!(banner.to_lowercase().contains("wait"));
    }

    #[tokio::test]
    async fn empty_results_are_a_silent_no_op() {
        let provider = Arc::new(MockProvider::without_results());
        let coordinator = SyncCoordinator::with_timings(provider, fast());

        let before = coordinator.market(MarketId::EuroMillions).await;
        let outcome = coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .expect("sync");
        assert_eq!(outcome, SyncOutcome::NoFreshData);

        let after = coordinator.market(MarketId::EuroMillions).await;
        assert_eq!(before, after);
        assert!(!coordinator.is_cached(MarketId::EuroMillions).await);
        assert!(coordinator.last_error().await.is_none());
        // The clock still advances, matching the dashboard header behaviour.
        assert!(coordinator.last_synced_at_ms().await.is_some());
    }

    #[tokio::test]
    async fn configuration_error_clears_in_flight_immediately() {
        let provider = Arc::new(MockProvider::failing(SyncError::Configuration(
            "No provider API key configured.".to_string(),
        )));
        let coordinator = SyncCoordinator::with_timings(provider, fast());

        let err = coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Configuration(_)));
        // No settle window on this path.
        assert!(!coordinator.is_syncing().await);

        let banner = coordinator.last_error().await.expect("error recorded");
        assert!(banner.contains("API key"));
    }

    #[tokio::test]
    async fn in_flight_flag_holds_through_the_settle_window() {
        let provider = Arc::new(MockProvider::ok());
        let coordinator = SyncCoordinator::with_timings(provider, fast());

        coordinator
            .synchronize(MarketId::EuroMillions, false)
            .await
            .expect("sync");
        // Immediately after resolution the flag is still set.
        assert!(coordinator.is_syncing().await);

        wait_settle(&coordinator).await;
        assert!(!coordinator.is_syncing().await);
    }
}
