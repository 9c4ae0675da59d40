mod common;
use common::{fixture_str, pa};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

/// Command isolated from the developer's real configuration.
fn isolated(home: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = pa();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_mean_time_table() {
    let home = tempfile::tempdir().expect("tempdir");

    isolated(&home)
        .args(["--data-csv", &fixture_str("test_data.csv"), "mean-time", "10"])
        .assert()
        .success()
        .stdout(contains("Mean presence time"))
        .stdout(contains("Tue"))
        .stdout(contains("08h 20m 47s"));
}

#[test]
fn test_presence_json_output() {
    let home = tempfile::tempdir().expect("tempdir");

    let output = isolated(&home)
        .args(["--data-csv", &fixture_str("test_data.csv"), "presence", "10", "--json"])
        .output()
        .expect("run presence");

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], serde_json::json!(["Weekday", "Presence (s)"]));
    assert_eq!(rows[2], serde_json::json!(["Tue", 30047]));
}

#[test]
fn test_start_end_table() {
    let home = tempfile::tempdir().expect("tempdir");

    isolated(&home)
        .args(["--data-csv", &fixture_str("test_data.csv"), "start-end", "10"])
        .assert()
        .success()
        .stdout(contains("09:39:05").and(contains("17:59:52")));
}

#[test]
fn test_unknown_user_fails() {
    let home = tempfile::tempdir().expect("tempdir");

    isolated(&home)
        .args(["--data-csv", &fixture_str("test_data.csv"), "mean-time", "666"])
        .assert()
        .failure()
        .stderr(contains("User 666 not found"));
}

#[test]
fn test_report_requires_user_or_timetable() {
    let home = tempfile::tempdir().expect("tempdir");

    isolated(&home).args(["presence"]).assert().failure();
}

#[test]
fn test_report_from_timetable_file() {
    let home = tempfile::tempdir().expect("tempdir");
    let tt = home.path().join("timetable.json");
    fs::write(
        &tt,
        r#"{"2013-09-09": {"start": "09:00:00", "end": "17:00:00"}}"#,
    )
    .expect("write timetable");
    let tt = tt.to_string_lossy().to_string();

    isolated(&home)
        .args(["mean-time", "--timetable", &tt, "--json"])
        .assert()
        .success()
        .stdout(contains(r#"["Mon",28800.0]"#));
}

#[test]
fn test_report_from_malformed_timetable_file() {
    let home = tempfile::tempdir().expect("tempdir");
    let tt = home.path().join("timetable.json");
    fs::write(&tt, r#"{"first": 123, "second": "123"}"#).expect("write timetable");
    let tt = tt.to_string_lossy().to_string();

    isolated(&home)
        .args(["mean-time", "--timetable", &tt])
        .assert()
        .failure()
        .stderr(contains("Malformed timetable"));
}

#[test]
fn test_users_listing() {
    let home = tempfile::tempdir().expect("tempdir");

    isolated(&home)
        .args(["--data-xml", &fixture_str("test_users.xml"), "users"])
        .assert()
        .success()
        .stdout(contains("User 10").and(contains("User 11")))
        .stdout(contains("https://intranet.example.com/api/images/users/11"));
}

#[test]
fn test_export_command() {
    let home = tempfile::tempdir().expect("tempdir");
    let out = home.path().join("mean.csv").to_string_lossy().to_string();
    let data_csv = fixture_str("test_data.csv");

    isolated(&home)
        .args([
            "--data-csv",
            &data_csv,
            "export",
            "--report",
            "mean-time",
            "--user",
            "11",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Weekday,Mean presence (s)"));
    assert!(content.contains("Thu,22258.5"));

    // second run without --force must not overwrite
    isolated(&home)
        .args([
            "--data-csv",
            &data_csv,
            "export",
            "--report",
            "presence",
            "--user",
            "11",
            "--file",
            &out,
        ])
        .assert()
        .failure()
        .stderr(contains("--force"));
}

#[test]
fn test_init_writes_config() {
    let home = tempfile::tempdir().expect("tempdir");

    isolated(&home).args(["init"]).assert().success();

    let conf = home
        .path()
        .join(".presence-analyzer")
        .join("presence-analyzer.conf");
    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("data_csv"));
    assert!(content.contains("port: 5000"));

    isolated(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("templates_dir"));
}

#[test]
fn test_init_test_mode_does_not_write_config() {
    let home = tempfile::tempdir().expect("tempdir");

    isolated(&home).args(["--test", "init"]).assert().success();

    assert!(
        !home
            .path()
            .join(".presence-analyzer")
            .join("presence-analyzer.conf")
            .exists()
    );
}

#[test]
fn test_config_file_paths_are_used() {
    let home = tempfile::tempdir().expect("tempdir");
    let dir = home.path().join(".presence-analyzer");
    fs::create_dir_all(&dir).expect("config dir");
    fs::write(
        dir.join("presence-analyzer.conf"),
        format!("data_csv: {}\n", fixture_str("test_data.csv")),
    )
    .expect("write config");

    isolated(&home)
        .args(["presence", "11"])
        .assert()
        .success()
        .stdout(contains("Thu"));
}
