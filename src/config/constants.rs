// Top Level Constants
pub const SUGGESTED_LINE_COUNT: usize = 5;
pub const MOST_DRAWN_DISPLAY_COUNT: usize = 5;
pub const FREQUENCY_DISPLAY_COUNT: usize = 5;

/// How many past draws to request when recomputing statistics.
pub const HISTORY_FETCH_LIMIT: usize = 100;

pub mod sync {
    use std::time::Duration;

    /// Delay between a market selection and the scheduled synchronization,
    /// so rapid menu churn does not burn through the provider quota.
    pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1200);

    /// How long the in-flight flag stays set after a sync resolves.
    /// Prevents immediate re-trigger flapping.
    pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);
}
