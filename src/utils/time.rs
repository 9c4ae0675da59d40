//! Time-of-day arithmetic: offsets since midnight, intervals, parsing.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Parse an `HH:MM:SS` time of day.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M:%S").map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Seconds elapsed from 00:00:00 to `time`.
pub fn seconds_since_midnight<T: Timelike>(time: &T) -> i64 {
    time.hour() as i64 * 3600 + time.minute() as i64 * 60 + time.second() as i64
}

/// Signed seconds from `start` to `end`.
///
/// Negative when `end` precedes `start`; the value is not wrapped around
/// midnight.
pub fn interval<T: Timelike>(start: &T, end: &T) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Render an offset since midnight as `HH:MM:SS` (fractions are dropped).
pub fn format_offset(secs: f64) -> String {
    let total = secs.trunc() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let s = total.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
