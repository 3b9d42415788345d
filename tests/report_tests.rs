use chrono::NaiveDate;
use rworktime::config::Config;
use rworktime::core::processor::process;
use rworktime::core::runlog::RunLog;
use rworktime::input::read_csv_str;
use rworktime::models::TimesheetResult;
use rworktime::report::ReportFormatter;

mod common;
use common::SAMPLE_CSV;

fn sample_result(csv: &str) -> TimesheetResult {
    let table = read_csv_str(csv).unwrap();
    let mut log = RunLog::new();
    process(&table, Config::default().hours_range(), &mut log).unwrap()
}

fn stamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn render(result: &TimesheetResult) -> String {
    ReportFormatter::new(&Config::default()).format(
        result,
        "WorkingTimeTracker_march.csv",
        &stamp(),
    )
}

#[test]
fn test_report_layout() {
    let result = sample_result(SAMPLE_CSV);
    let report = render(&result);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "=".repeat(123));
    assert!(lines[1].contains(" 📊 WORKING HOURS - SUMMARY "));
    assert!(lines[1].starts_with("===="));
    assert_eq!(lines[2], "=".repeat(123));

    assert!(lines[4].starts_with("Employee"));
    assert!(lines[4].ends_with("Days"));
    assert_eq!(lines[5], "-".repeat(120));

    let alice = format!("{:<30} {:>20}", "Alice", "20h30m00s");
    let bob = format!("{:<30} {:>20}", "Bob", "17h00m00s");
    let all = format!("{:<30} {:>20}", "ALL EMPLOYEES", "37h30m00s");
    assert!(lines[6].starts_with(&alice), "{}", lines[6]);
    assert!(lines[6].contains("20.50"));
    assert!(lines[6].contains("1230"));
    assert!(lines[6].contains("73800"));
    assert!(lines[6].ends_with(" 3"));
    assert!(lines[7].starts_with(&bob), "{}", lines[7]);
    assert!(lines[7].ends_with(" 2"));
    assert_eq!(lines[8], "-".repeat(120));
    assert!(lines[9].starts_with(&all), "{}", lines[9]);
    assert!(lines[9].contains("37.50"));
    assert!(lines[9].ends_with(" 5"));

    assert!(report.contains(" 📋 DETAILS BY EMPLOYEE "));
    assert!(report.contains("👤 Alice:\n"));
    assert!(report.contains("👤 Bob:\n"));
    assert!(report.contains(&format!("\n{}\n👤 Bob:", "-".repeat(123))));
    assert!(report.contains(" Completed "));
}

#[test]
fn test_report_footer() {
    let report = render(&sample_result(SAMPLE_CSV));

    assert!(report.contains("📁 Original file: WorkingTimeTracker_march.csv\n"));
    assert!(report.contains("📅 Calculated on: 05.03.2025 14:30:00\n"));
    assert!(report.contains("📋 Log file: Log.txt\n"));
    assert!(report.ends_with(&format!("\n\n{}\n", "=".repeat(123))));
}

#[test]
fn test_report_is_deterministic() {
    let result = sample_result(SAMPLE_CSV);
    assert_eq!(render(&result), render(&result));
}

#[test]
fn test_long_names_are_truncated() {
    let csv = "Maximilian Alexander von Hohenberg-Schwarzenfels,\n08:00,16:00\n";
    let report = render(&sample_result(csv));
    let row = report
        .lines()
        .find(|l| l.starts_with("Maximilian"))
        .unwrap();

    assert!(row.contains('…'));
    assert!(!row.contains("Schwarzenfels"));
    // full name still appears in the details section
    assert!(report.contains("👤 Maximilian Alexander von Hohenberg-Schwarzenfels:"));
}

#[test]
fn test_duplicate_names_are_labelled() {
    let csv = "Ann,,Ann,\n08:00,16:00,10:00,12:00\n";
    let report = render(&sample_result(csv));

    assert!(report.contains(&format!("{:<30} {:>20}", "Ann [col 1]", "8h00m00s")));
    assert!(report.contains(&format!("{:<30} {:>20}", "Ann [col 3]", "2h00m00s")));
    assert!(report.contains("👤 Ann [col 3]:"));
}

#[test]
fn test_custom_prefixes_reach_the_footer() {
    let cfg = Config {
        log_file_prefix: "Protokoll".to_string(),
        result_date_format: "%Y-%m-%d".to_string(),
        ..Config::default()
    };
    let report = ReportFormatter::new(&cfg).format(&sample_result(SAMPLE_CSV), "x.csv", &stamp());

    assert!(report.contains("📋 Log file: Protokoll.txt\n"));
    assert!(report.contains("📅 Calculated on: 2025-03-05\n"));
}
