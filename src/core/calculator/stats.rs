//! Reductions over weekday buckets.

use crate::core::calculator::grouping::{group_by_weekday, group_start_end};
use crate::models::{MeanStartEnd, PresenceRecord};
use chrono::NaiveDate;

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(items: &[i64]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    items.iter().sum::<i64>() as f64 / items.len() as f64
}

/// Mean presence duration (seconds) per weekday, Monday first.
pub fn mean_duration_by_weekday<'a, I>(items: I) -> [f64; 7]
where
    I: IntoIterator<Item = (&'a NaiveDate, &'a PresenceRecord)>,
{
    group_by_weekday(items).map(|durations| mean(&durations))
}

/// Total presence duration (seconds) per weekday, Monday first.
pub fn total_duration_by_weekday<'a, I>(items: I) -> [i64; 7]
where
    I: IntoIterator<Item = (&'a NaiveDate, &'a PresenceRecord)>,
{
    group_by_weekday(items).map(|durations| durations.iter().sum())
}

/// Mean start and end offsets since midnight per weekday, Monday first.
///
/// Starts and ends are averaged independently.
pub fn mean_start_end<'a, I>(items: I) -> [MeanStartEnd; 7]
where
    I: IntoIterator<Item = (&'a NaiveDate, &'a PresenceRecord)>,
{
    group_start_end(items).map(|bucket| MeanStartEnd {
        start: mean(&bucket.starts),
        end: mean(&bucket.ends),
    })
}
