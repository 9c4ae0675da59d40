//! Timetable documents in JSON, the shape the CLI accepts for ad-hoc analysis:
//!
//! ```text
//! {
//!     "2013-09-10": { "start": "09:39:05", "end": "17:59:52" },
//!     "2013-09-11": { "start": "08:30:00", "end": "16:45:00" }
//! }
//! ```
//!
//! This is the only place where the shape of a timetable is checked at
//! runtime. Once a `Timetable` exists the calculators trust it completely.

use crate::errors::{AppError, AppResult};
use crate::models::presence::{PresenceRecord, Timetable};
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Build a timetable from a JSON document.
///
/// Fails with `MalformedTimetable` when the document is not an object of
/// `{start, end}` objects keyed by `YYYY-MM-DD`, and with `InvalidTime`
/// when a `start`/`end` value is not an `HH:MM:SS` time of day.
pub fn timetable_from_json(doc: &Value) -> AppResult<Timetable> {
    let entries = doc.as_object().ok_or_else(|| {
        AppError::MalformedTimetable(format!(
            "expected an object keyed by date, got {}",
            kind_of(doc)
        ))
    })?;

    let mut timetable = Timetable::with_capacity(entries.len());

    for (key, value) in entries {
        let fields = value.as_object().ok_or_else(|| {
            AppError::MalformedTimetable(format!(
                "entry '{key}' is {}, expected an object with start and end",
                kind_of(value)
            ))
        })?;

        let (Some(start), Some(end)) = (fields.get("start"), fields.get("end")) else {
            return Err(AppError::MalformedTimetable(format!(
                "entry '{key}' has no start/end fields"
            )));
        };

        let date = parse_date(key).ok_or_else(|| {
            AppError::MalformedTimetable(format!("key '{key}' is not a YYYY-MM-DD date"))
        })?;

        timetable.insert(date, PresenceRecord::new(time_field(start)?, time_field(end)?));
    }

    Ok(timetable)
}

/// Read and validate a JSON timetable file.
pub fn read_timetable(path: &Path) -> AppResult<Timetable> {
    let content = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&content)?;
    timetable_from_json(&doc)
}

fn time_field(value: &Value) -> AppResult<NaiveTime> {
    match value {
        Value::String(s) => parse_time(s),
        other => Err(AppError::InvalidTime(other.to_string())),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
