use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::report::WeekdayReport;
use crate::data::get_user_timetable;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        report,
        user_id,
        format,
        file,
        force,
    } = cmd
    {
        let timetable = get_user_timetable(&cfg.data_csv_path(), *user_id)?;
        let report = WeekdayReport::build(*report, &timetable);
        ExportLogic::export(&report, *format, file, *force)?;
    }
    Ok(())
}
