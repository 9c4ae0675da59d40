use chrono::{Datelike, NaiveDate};

/// Short weekday labels, Monday first.
pub const WEEKDAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Monday = 0 … Sunday = 6.
pub fn weekday_index(date: &NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Label for a weekday index; indexes past Sunday wrap around.
pub fn weekday_abbr(index: usize) -> &'static str {
    WEEKDAY_ABBR[index % 7]
}
