use crate::errors::{AppError, AppResult};
use crate::models::{PresenceData, PresenceRecord, Timetable};
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::debug;

/// Read presence CSV rows `user_id,date,start,end` grouped by user id:
///
/// ```text
/// { 10: { 2013-10-01: { start: 09:00:00, end: 17:30:00 },
///         2013-10-02: { start: 08:30:00, end: 16:45:00 } } }
/// ```
///
/// Rows with other than four fields (header, footer) are ignored, rows with
/// unparsable fields are logged and dropped. A later row for the same user
/// and date replaces the earlier one.
pub fn get_data(path: &Path) -> AppResult<PresenceData> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut data = PresenceData::new();

    for (i, row) in rdr.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(line = i + 1, error = %e, "unreadable presence row");
                continue;
            }
        };

        if row.len() != 4 {
            continue;
        }

        match parse_row(&row) {
            Ok((user_id, date, record)) => {
                data.entry(user_id).or_default().insert(date, record);
            }
            Err(e) => debug!(line = i + 1, error = %e, "problem with presence row"),
        }
    }

    debug!(users = data.len(), path = %path.display(), "presence data loaded");
    Ok(data)
}

/// Timetable of a single user.
pub fn get_user_timetable(path: &Path, user_id: u32) -> AppResult<Timetable> {
    get_data(path)?
        .remove(&user_id)
        .ok_or(AppError::UserNotFound(user_id))
}

fn parse_row(row: &StringRecord) -> AppResult<(u32, chrono::NaiveDate, PresenceRecord)> {
    let user_id = row[0]
        .parse::<u32>()
        .map_err(|_| AppError::Other(format!("invalid user id: {}", &row[0])))?;
    let date = parse_date(&row[1]).ok_or_else(|| AppError::InvalidDate(row[1].to_string()))?;
    let start = parse_time(&row[2])?;
    let end = parse_time(&row[3])?;

    Ok((user_id, date, PresenceRecord::new(start, end)))
}
