//! Presence aggregation: weekday grouping, reductions and the report and
//! export layers built on top of them.

pub mod calculator;
pub mod config;
pub mod export;
pub mod report;

pub use calculator::grouping::{group_by_weekday, group_start_end};
pub use calculator::stats::{mean, mean_duration_by_weekday, mean_start_end, total_duration_by_weekday};
pub use report::{ReportKind, WeekdayReport};
