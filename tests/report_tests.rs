mod common;
use common::user_10_timetable;
use presence_analyzer::core::export::{ExportFormat, ExportLogic};
use presence_analyzer::core::report::{ReportKind, WeekdayReport};
use presence_analyzer::errors::AppError;
use presence_analyzer::models::Timetable;
use serde_json::json;
use std::fs;

#[test]
fn test_mean_time_report_json() {
    let report = WeekdayReport::build(ReportKind::MeanTime, &user_10_timetable());
    let body = report.to_json();

    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0], json!(["Mon", 0.0]));
    assert_eq!(rows[1], json!(["Tue", 30047.0]));
    assert_eq!(rows[6], json!(["Sun", 0.0]));
}

#[test]
fn test_presence_report_json_has_header_row() {
    let report = WeekdayReport::presence(&user_10_timetable());
    let body = report.to_json();

    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], json!(["Weekday", "Presence (s)"]));
    assert_eq!(rows[1], json!(["Mon", 0]));
    assert_eq!(rows[2], json!(["Tue", 30047]));
    assert_eq!(rows[4], json!(["Thu", 23705]));
}

#[test]
fn test_start_end_report_json() {
    let report = WeekdayReport::start_end(&user_10_timetable());
    let body = report.to_json();

    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[1], json!(["Tue", 34745.0, 64792.0]));
    assert_eq!(rows[5], json!(["Sat", 0.0, 0.0]));
}

#[test]
fn test_report_labels_in_weekday_order() {
    let report = WeekdayReport::mean_time(&Timetable::new());
    let labels: Vec<String> = report.raw_rows().into_iter().map(|r| r[0].clone()).collect();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
}

#[test]
fn test_readable_rows() {
    let report = WeekdayReport::start_end(&user_10_timetable());
    let rows = report.readable_rows();
    assert_eq!(rows[1], vec!["Tue", "09:39:05", "17:59:52"]);

    let report = WeekdayReport::presence(&user_10_timetable());
    assert_eq!(report.readable_rows()[1], vec!["Tue", "08h 20m 47s"]);
}

#[test]
fn test_export_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("presence.csv");
    let out_str = out.to_string_lossy().to_string();

    let report = WeekdayReport::presence(&user_10_timetable());
    ExportLogic::export(&report, ExportFormat::Csv, &out_str, false).expect("export csv");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Weekday,Presence (s)");
    assert_eq!(lines[2], "Tue,30047");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_export_json_matches_api_body() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("start_end.json");
    let out_str = out.to_string_lossy().to_string();

    let report = WeekdayReport::start_end(&user_10_timetable());
    ExportLogic::export(&report, ExportFormat::Json, &out_str, false).expect("export json");

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed, report.to_json());
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("existing.csv");
    fs::write(&out, "keep me").expect("write file");
    let out_str = out.to_string_lossy().to_string();

    let report = WeekdayReport::mean_time(&user_10_timetable());

    let err = ExportLogic::export(&report, ExportFormat::Csv, &out_str, false).unwrap_err();
    assert!(matches!(err, AppError::Export(_)), "{err:?}");
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    ExportLogic::export(&report, ExportFormat::Csv, &out_str, true).expect("forced export");
    assert!(fs::read_to_string(&out).unwrap().starts_with("Weekday,"));
}
