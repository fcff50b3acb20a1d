use chrono::DateTime;

/// Axis label for a sample time: `HH:MM:SS` in UTC.
///
/// Timestamps beyond chrono's representable range fall back to the raw millis.
pub fn format_time_label(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|time| time.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// Log line timestamp: `HH:MM:SS.mmm` in UTC.
pub fn format_log_time(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|time| time.format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}
