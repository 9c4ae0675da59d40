//! Weekday reports: core statistics labelled with weekday names, in
//! Monday → Sunday order, ready for the CLI, the exporters and the web API.

use crate::core::calculator::stats::{mean_duration_by_weekday, mean_start_end, total_duration_by_weekday};
use crate::models::Timetable;
use crate::utils::date::weekday_abbr;
use crate::utils::formatting::secs2readable;
use crate::utils::time::format_offset;
use clap::ValueEnum;
use serde_json::{Value, json};

/// Header row prepended to the presence report for chart consumption.
pub const PRESENCE_HEADER: [&str; 2] = ["Weekday", "Presence (s)"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Mean presence time per weekday
    MeanTime,
    /// Total presence time per weekday
    Presence,
    /// Mean start and end time per weekday
    StartEnd,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::MeanTime => "mean-time",
            ReportKind::Presence => "presence",
            ReportKind::StartEnd => "start-end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeekdayReport {
    MeanTime(Vec<(&'static str, f64)>),
    Presence(Vec<(&'static str, i64)>),
    StartEnd(Vec<(&'static str, f64, f64)>),
}

impl WeekdayReport {
    pub fn build(kind: ReportKind, timetable: &Timetable) -> Self {
        match kind {
            ReportKind::MeanTime => Self::mean_time(timetable),
            ReportKind::Presence => Self::presence(timetable),
            ReportKind::StartEnd => Self::start_end(timetable),
        }
    }

    pub fn mean_time(timetable: &Timetable) -> Self {
        let rows = mean_duration_by_weekday(timetable)
            .into_iter()
            .enumerate()
            .map(|(weekday, secs)| (weekday_abbr(weekday), secs))
            .collect();
        WeekdayReport::MeanTime(rows)
    }

    pub fn presence(timetable: &Timetable) -> Self {
        let rows = total_duration_by_weekday(timetable)
            .into_iter()
            .enumerate()
            .map(|(weekday, secs)| (weekday_abbr(weekday), secs))
            .collect();
        WeekdayReport::Presence(rows)
    }

    pub fn start_end(timetable: &Timetable) -> Self {
        let rows = mean_start_end(timetable)
            .into_iter()
            .enumerate()
            .map(|(weekday, day)| (weekday_abbr(weekday), day.start, day.end))
            .collect();
        WeekdayReport::StartEnd(rows)
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            WeekdayReport::MeanTime(_) => ReportKind::MeanTime,
            WeekdayReport::Presence(_) => ReportKind::Presence,
            WeekdayReport::StartEnd(_) => ReportKind::StartEnd,
        }
    }

    /// Column names for raw (seconds) output.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            WeekdayReport::MeanTime(_) => &["Weekday", "Mean presence (s)"],
            WeekdayReport::Presence(_) => &PRESENCE_HEADER,
            WeekdayReport::StartEnd(_) => &["Weekday", "Mean start (s)", "Mean end (s)"],
        }
    }

    /// The JSON body served by the web API.
    ///
    /// Rows are `[label, value...]` arrays; the presence report gets the
    /// `["Weekday", "Presence (s)"]` header row in front.
    pub fn to_json(&self) -> Value {
        match self {
            WeekdayReport::MeanTime(rows) => {
                Value::Array(rows.iter().map(|(day, secs)| json!([day, secs])).collect())
            }
            WeekdayReport::Presence(rows) => {
                let mut out = vec![json!(PRESENCE_HEADER)];
                out.extend(rows.iter().map(|(day, secs)| json!([day, secs])));
                Value::Array(out)
            }
            WeekdayReport::StartEnd(rows) => Value::Array(
                rows.iter()
                    .map(|(day, start, end)| json!([day, start, end]))
                    .collect(),
            ),
        }
    }

    /// Rows with raw seconds, matching `headers()`.
    pub fn raw_rows(&self) -> Vec<Vec<String>> {
        match self {
            WeekdayReport::MeanTime(rows) => rows
                .iter()
                .map(|(day, secs)| vec![day.to_string(), secs.to_string()])
                .collect(),
            WeekdayReport::Presence(rows) => rows
                .iter()
                .map(|(day, secs)| vec![day.to_string(), secs.to_string()])
                .collect(),
            WeekdayReport::StartEnd(rows) => rows
                .iter()
                .map(|(day, start, end)| vec![day.to_string(), start.to_string(), end.to_string()])
                .collect(),
        }
    }

    /// Human-readable rows for terminal tables.
    pub fn readable_rows(&self) -> Vec<Vec<String>> {
        match self {
            WeekdayReport::MeanTime(rows) => rows
                .iter()
                .map(|(day, secs)| vec![day.to_string(), secs2readable(*secs as i64, false)])
                .collect(),
            WeekdayReport::Presence(rows) => rows
                .iter()
                .map(|(day, secs)| vec![day.to_string(), secs2readable(*secs, false)])
                .collect(),
            WeekdayReport::StartEnd(rows) => rows
                .iter()
                .map(|(day, start, end)| {
                    vec![day.to_string(), format_offset(*start), format_offset(*end)]
                })
                .collect(),
        }
    }

    pub fn readable_headers(&self) -> &'static [&'static str] {
        match self {
            WeekdayReport::MeanTime(_) => &["Weekday", "Mean presence"],
            WeekdayReport::Presence(_) => &["Weekday", "Total presence"],
            WeekdayReport::StartEnd(_) => &["Weekday", "Mean start", "Mean end"],
        }
    }
}
