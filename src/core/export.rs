use crate::core::report::WeekdayReport;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export a weekday report.
    ///
    /// - `format`: csv (header + raw seconds) or json (the API body)
    /// - `file`: output path; an existing file is only replaced with `force`
    pub fn export(report: &WeekdayReport, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        debug!(report = report.kind().as_str(), format = format.as_str(), path = %path.display(), "exporting report");

        match format {
            ExportFormat::Csv => export_csv(report, path)?,
            ExportFormat::Json => export_json(report, path)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}

/// Export JSON pretty-printed, same shape the web API serves.
fn export_json(report: &WeekdayReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&report.to_json())?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Export CSV with a header row.
fn export_csv(report: &WeekdayReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(report.headers())?;
    for row in report.raw_rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
