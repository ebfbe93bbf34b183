//!
//! Utility functions.
//!

use chrono::DateTime;

///
/// Formats a number the way the dashboard page prints it.
///
/// Uses the shortest representation that reads back to the same value, in decimal notation
/// for magnitudes in `[1e-6, 1e21)` and in exponential notation otherwise.
///
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}

///
/// Formats a Unix timestamp in milliseconds as a UTC date and time.
///
/// Falls back to the raw number if the timestamp is out of range.
///
pub fn format_date(date: u64) -> String {
    i64::try_from(date)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| date.to_string())
}
