mod error;
mod provider;
mod sync;

#[cfg(test)]
pub(crate) mod testutil;

pub use {
    error::SyncError,
    provider::{LottoDataProvider, ProviderDraw, RapidApiProvider},
    sync::{MarketUpdate, SyncCoordinator, SyncOutcome, SyncTimings},
};
