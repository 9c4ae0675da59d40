#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use presence_analyzer::models::{PresenceRecord, Timetable};
use std::path::PathBuf;

pub fn pa() -> Command {
    cargo_bin_cmd!("presence-analyzer")
}

/// Path of a fixture under tests/data
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

pub fn fixture_str(name: &str) -> String {
    fixture(name).to_string_lossy().to_string()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

pub fn record(start: NaiveTime, end: NaiveTime) -> PresenceRecord {
    PresenceRecord::new(start, end)
}

/// Timetable of user 10 in test_data.csv
pub fn user_10_timetable() -> Timetable {
    let mut tt = Timetable::new();
    tt.insert(date(2013, 9, 10), record(time(9, 39, 5), time(17, 59, 52)));
    tt.insert(date(2013, 9, 11), record(time(9, 19, 52), time(16, 7, 37)));
    tt.insert(date(2013, 9, 12), record(time(10, 48, 46), time(17, 23, 51)));
    tt
}
