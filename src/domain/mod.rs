mod draw;
mod market;

pub use draw::{DrawRecord, FrequencyEntry};
pub use market::{ExtraPool, Market, MarketId};
