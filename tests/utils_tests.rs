use chrono::NaiveDate;
use rworktime::utils::date::{format_datetime, is_valid_format};
use rworktime::utils::formatting::{centered_rule, display_width, pad_left, pad_right, truncate};
use rworktime::utils::path::{expand_tilde, extension, file_name};
use rworktime::utils::pattern::FilePattern;
use rworktime::utils::time::{format_hms, format_seconds, hours_to_hms, hours_to_minutes};
use std::path::Path;

#[test]
fn test_format_hms() {
    assert_eq!(format_hms(0.0), "0h00m00s");
    assert_eq!(format_hms(8.5), "8h30m00s");
    assert_eq!(format_hms(23.0), "23h00m00s");
    assert_eq!(format_hms(100.25), "100h15m00s");
    assert_eq!(format_hms(17.0 + 5.0 / 60.0), "17h05m00s");
    assert_eq!(format_hms(5.5 / 3600.0), "0h00m05.5s");
}

#[test]
fn test_hms_carry() {
    // 59.999 seconds rounds up into the next minute
    assert_eq!(hours_to_hms(59.999 / 3600.0), (0, 1, 0.0));
    assert_eq!(hours_to_minutes(8.5), 510);
}

#[test]
fn test_format_seconds() {
    assert_eq!(format_seconds(30600.0), "30600");
    assert_eq!(format_seconds(37.5), "37.5");
    assert_eq!(format_seconds(0.25), "0.25");
}

#[test]
fn test_truncate_and_padding() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdefghij", 5), "abcd…");
    assert_eq!(display_width(&truncate("Zoë Müller-Lüdenscheidt", 8)), 8);
    assert_eq!(pad_right("ab", 4), "ab  ");
    assert_eq!(pad_left("ab", 4), "  ab");
    assert_eq!(pad_left("abcdef", 4), "abcdef");
}

#[test]
fn test_centered_rule() {
    let r = centered_rule("Title", 21, '=');
    assert_eq!(r, "======= Title =======");
    assert_eq!(centered_rule("x", 4, '-'), " x -");
}

#[test]
fn test_file_pattern() {
    let p = FilePattern::new("WorkingTimeTracker*.csv").unwrap();
    assert!(p.matches("WorkingTimeTracker.csv"));
    assert!(p.matches("WorkingTimeTracker_2025-03.csv"));
    assert!(!p.matches("WorkingTimeTracker.csv.bak"));
    assert!(!p.matches("MyWorkingTimeTracker.csv"));

    let q = FilePattern::new("sheet?.x+y").unwrap();
    assert!(q.matches("sheet1.x+y"));
    assert!(!q.matches("sheet12.x+y"));
    assert!(!q.matches("sheet1.xxy"));
}

#[test]
fn test_paths() {
    assert_eq!(file_name(Path::new("/tmp/a/WorkingTimeTracker.csv")), "WorkingTimeTracker.csv");
    assert_eq!(extension(Path::new("Sheet.XLSX")), "xlsx");
    assert_eq!(extension(Path::new("noext")), "");
    assert_eq!(expand_tilde("/abs/path"), Path::new("/abs/path"));
}

#[test]
fn test_timezone_formats_fall_back_instead_of_panicking() {
    let dt = NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();

    assert!(is_valid_format("%d.%m.%Y %H:%M:%S"));
    for fmt in ["%d.%m.%Y %H:%M:%S %Z", "%z", "%:z", "%+", "%Q"] {
        assert!(!is_valid_format(fmt), "{fmt}");
        assert_eq!(format_datetime(&dt, fmt), "2025-03-05 14:30:00");
    }
    assert_eq!(format_datetime(&dt, "%d.%m.%Y"), "05.03.2025");
}
