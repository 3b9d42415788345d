use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

mod common;
use common::{SAMPLE_CSV, only_archive_run, rwt, write_fast_config, write_file};

#[test]
fn test_parse_prints_each_value() {
    let dir = tempdir().unwrap();
    let cfg = write_fast_config(dir.path());

    rwt()
        .args(["--config", cfg.to_str().unwrap(), "parse", "09:00", "1705.0", "8,5", "abc"])
        .assert()
        .success()
        .stdout(contains("9h00m00s"))
        .stdout(contains("(colon)"))
        .stdout(contains("17h05m00s"))
        .stdout(contains("(fixed-width .0)"))
        .stdout(contains("8h30m00s"))
        .stdout(contains("(decimal)"))
        .stdout(contains("abc  →  unparseable"));
}

#[test]
fn test_parse_json() {
    let dir = tempdir().unwrap();
    let cfg = write_fast_config(dir.path());

    let out = rwt()
        .args(["--config", cfg.to_str().unwrap(), "parse", "--json", "1705", "-1"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json[0]["input"], "1705");
    assert_eq!(json[0]["notation"], "DigitRun");
    assert_eq!(json[0]["clock"], "17h05m00s");
    assert_eq!(json[1]["input"], "-1");
    assert!(json[1]["hours"].is_null());
}

#[test]
fn test_init_and_print_config() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("conf").join("rworktime.conf");
    let cfg = cfg.to_str().unwrap();

    rwt()
        .args(["--config", cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));
    assert!(fs::read_to_string(cfg).unwrap().contains("archive_folder_name: Archive"));

    rwt()
        .args(["--config", cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    rwt()
        .args(["--config", cfg, "init", "--force"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    rwt()
        .args(["--config", cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("file_patterns:"))
        .stdout(contains("WorkingTimeTracker*.csv"))
        .stdout(contains("max_hours_per_day: 24.0"));
}

#[test]
fn test_run_prints_report() {
    let dir = tempdir().unwrap();
    let cfg = write_fast_config(dir.path());
    write_file(dir.path(), "WorkingTimeTracker.csv", SAMPLE_CSV);

    rwt()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "run",
            "--dir",
            dir.path().to_str().unwrap(),
            "--print",
        ])
        .assert()
        .success()
        .stdout(contains("WORKING HOURS - SUMMARY"))
        .stdout(contains("ALL EMPLOYEES"))
        .stdout(contains("2 employee(s) over 3 data row(s) processed"));

    let folder = only_archive_run(dir.path());
    assert!(folder.join("Result.txt").exists());
    assert!(folder.join("Log.txt").exists());
    assert!(folder.join("WorkingTimeTracker.csv").exists());
}

#[test]
fn test_run_without_input_fails() {
    let dir = tempdir().unwrap();
    let cfg = write_fast_config(dir.path());

    rwt()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "run",
            "--dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("No input file found"));

    let log = fs::read_to_string(dir.path().join("Log.txt")).unwrap();
    assert!(log.contains("❌ FAILED"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    let cfg = write_file(
        dir.path(),
        "rworktime.conf",
        "min_hours_per_day: 10.0\nmax_hours_per_day: 2.0\n",
    );

    rwt()
        .args(["--config", cfg.to_str().unwrap(), "parse", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
