use crate::cli::parser::{Commands, ReportSource};
use crate::config::Config;
use crate::core::report::{ReportKind, WeekdayReport};
use crate::data::get_user_timetable;
use crate::errors::{AppError, AppResult};
use crate::models::{Timetable, read_timetable};
use crate::ui::messages::header;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Some((kind, user_id, source)) = cmd.report_args() else {
        return Ok(());
    };

    let timetable = load_timetable(cfg, user_id, source)?;
    let report = WeekdayReport::build(kind, &timetable);

    if source.json {
        println!("{}", serde_json::to_string(&report.to_json())?);
        return Ok(());
    }

    let subject = match (user_id, &source.timetable) {
        (Some(id), _) => format!("user {id}"),
        (None, Some(file)) => file.clone(),
        (None, None) => String::new(),
    };
    header(format!("{} – {}", title(kind), subject));

    let mut table = Table::new(report.readable_headers().iter().copied());
    for row in report.readable_rows() {
        table.add_row(row);
    }
    print!("{}", table.render());
    Ok(())
}

fn load_timetable(cfg: &Config, user_id: Option<u32>, source: &ReportSource) -> AppResult<Timetable> {
    match (user_id, &source.timetable) {
        (_, Some(file)) => read_timetable(Path::new(file)),
        (Some(id), None) => get_user_timetable(&cfg.data_csv_path(), id),
        (None, None) => Err(AppError::Other(
            "either a user id or --timetable is required".into(),
        )),
    }
}

fn title(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::MeanTime => "Mean presence time",
        ReportKind::Presence => "Total presence time",
        ReportKind::StartEnd => "Mean start / end",
    }
}
