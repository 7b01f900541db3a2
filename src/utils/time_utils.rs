use chrono::{DateTime, Local};

pub fn now_timestamp_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Wall-clock rendering for the dashboard header.
pub fn format_clock_time(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "--:--".to_string(),
    }
}
