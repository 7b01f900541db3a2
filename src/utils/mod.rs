mod time_utils;

pub use time_utils::{format_clock_time, now_timestamp_ms};
