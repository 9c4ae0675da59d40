//! Partitions a timetable into seven weekday buckets (Monday = 0 … Sunday = 6).
//!
//! Both functions accept any iterable of `(&date, &record)` pairs, so a
//! `HashMap`, a `BTreeMap` or a slice of pairs all work. Bucket membership
//! depends only on the date; the order of values inside a bucket follows the
//! iteration order of the source and carries no meaning.

use crate::models::{PresenceRecord, StartEndBucket};
use crate::utils::date::weekday_index;
use crate::utils::time::{interval, seconds_since_midnight};
use chrono::NaiveDate;

/// Presence durations (end - start, in seconds) grouped by weekday.
///
/// Durations are signed: an end-before-start record contributes a negative
/// value, unclamped.
pub fn group_by_weekday<'a, I>(items: I) -> [Vec<i64>; 7]
where
    I: IntoIterator<Item = (&'a NaiveDate, &'a PresenceRecord)>,
{
    let mut result: [Vec<i64>; 7] = Default::default();
    for (date, record) in items {
        result[weekday_index(date)].push(interval(&record.start, &record.end));
    }
    result
}

/// Start and end offsets since midnight grouped by weekday.
pub fn group_start_end<'a, I>(items: I) -> [StartEndBucket; 7]
where
    I: IntoIterator<Item = (&'a NaiveDate, &'a PresenceRecord)>,
{
    let mut result: [StartEndBucket; 7] = Default::default();
    for (date, record) in items {
        let bucket = &mut result[weekday_index(date)];
        bucket.starts.push(seconds_since_midnight(&record.start));
        bucket.ends.push(seconds_since_midnight(&record.end));
    }
    result
}
