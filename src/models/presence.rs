use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;

/// Start and end of one user's presence on one calendar date.
///
/// `end` is expected to be after `start`, but nothing enforces it: an
/// end-before-start record yields a negative duration downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresenceRecord {
    pub start: NaiveTime, // ⇔ csv column 3 (HH:MM:SS)
    pub end: NaiveTime,   // ⇔ csv column 4 (HH:MM:SS)
}

impl PresenceRecord {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// One user's records, one per date.
pub type Timetable = HashMap<NaiveDate, PresenceRecord>;

/// Every user's timetable, keyed by user id.
pub type PresenceData = HashMap<u32, Timetable>;
