use rworktime::core::processor::{day_records, discover_employees, process};
use rworktime::core::runlog::{Level, RunLog};
use rworktime::errors::AppError;
use rworktime::models::{HoursRange, RawCell, Table};

fn run(rows: &[&[&str]]) -> Result<rworktime::models::TimesheetResult, AppError> {
    let mut log = RunLog::new();
    process(&Table::from_strings(rows), HoursRange::default(), &mut log)
}

#[test]
fn test_two_employees_one_day() {
    let r = run(&[&["Alice", "", "Bob", ""], &["09:00", "17:30", "08:15", "16:45"]]).unwrap();

    assert_eq!(r.names(), vec!["Alice", "Bob"]);
    assert_eq!(r.data_rows, 1);
    for name in ["Alice", "Bob"] {
        let e = r.get(name).unwrap();
        assert_eq!(e.days_worked, 1);
        assert_eq!(e.total_hours, 8.5);
        assert_eq!(e.average_hours, 8.5);
        assert!(e.details[0].starts_with("  Day    1:"));
    }
    assert_eq!(r.get("Bob").unwrap().column, 2);
    assert_eq!(r.total_hours(), 17.0);
    assert_eq!(r.total_days(), 2);
}

#[test]
fn test_missing_clock_out_skips_the_day() {
    let r = run(&[&["Alice", ""], &["1705", ""], &["08:00", "12:00"]]).unwrap();
    let alice = r.get("Alice").unwrap();

    assert_eq!(alice.days_worked, 1);
    assert_eq!(alice.total_hours, 4.0);
    // the skipped row keeps its number: the counted day is day 2
    assert!(alice.details[0].starts_with("  Day    2:"));
}

#[test]
fn test_employee_without_entries() {
    let r = run(&[
        &["Alice", "", "Bob", ""],
        &["09:00", "17:00", "", ""],
        &["", "", "", ""],
    ])
    .unwrap();
    let bob = r.get("Bob").unwrap();

    assert_eq!(bob.days_worked, 0);
    assert_eq!(bob.total_hours, 0.0);
    assert_eq!(bob.average_hours, 0.0);
    assert_eq!(
        bob.details.last().unwrap(),
        "  📊 Total: 0h00m00s / 0 days (daily average: 0h00m00s)"
    );
}

#[test]
fn test_no_employees_is_an_error() {
    assert!(matches!(
        run(&[&["", "", "", ""], &["09:00", "17:00", "", ""]]),
        Err(AppError::NoEmployeesFound)
    ));
    assert!(matches!(run(&[]), Err(AppError::NoEmployeesFound)));
    // names only in odd columns do not start a pair
    assert!(matches!(
        run(&[&["", "Alice", "", "Bob"], &["09:00", "17:00", "", ""]]),
        Err(AppError::NoEmployeesFound)
    ));
}

#[test]
fn test_dangling_last_column_is_ignored() {
    let mut log = RunLog::new();
    let table = Table::from_strings(&[&["Alice", "", "Carol"], &["09:00", "17:00", "10:00"]]);

    let r = process(&table, HoursRange::default(), &mut log).unwrap();

    assert_eq!(r.names(), vec!["Alice"]);
    assert!(log.entries().iter().any(|e| e.level == Level::Warn && e.message.contains("Carol")));
}

#[test]
fn test_duplicate_names_stay_separate() {
    let mut log = RunLog::new();
    let table = Table::from_strings(&[
        &["Ann", "", "Ann", ""],
        &["08:00", "16:00", "10:00", "12:00"],
    ]);

    let r = process(&table, HoursRange::default(), &mut log).unwrap();

    assert_eq!(r.employees.len(), 2);
    assert_eq!(r.duplicate_names(), vec!["Ann"]);
    assert_eq!(r.get("Ann").unwrap().total_hours, 8.0);
    assert_eq!(r.employees[1].total_hours, 2.0);
    assert_eq!(r.label(&r.employees[0]), "Ann [col 1]");
    assert_eq!(r.label(&r.employees[1]), "Ann [col 3]");
    assert!(log.entries().iter().any(|e| e.level == Level::Warn && e.message.contains("'Ann'")));
}

#[test]
fn test_names_are_trimmed_and_order_kept() {
    let r = run(&[
        &["  Zoe ", "", "Adam", "", "Mia", ""],
        &["08:00", "09:00", "08:00", "10:00", "08:00", "11:00"],
    ])
    .unwrap();

    assert_eq!(r.names(), vec!["Zoe", "Adam", "Mia"]);
    assert_eq!(r.label(&r.employees[0]), "Zoe");
}

#[test]
fn test_discovery_and_day_records() {
    let table = Table::from_strings(&[&["A", "", "", "", "B", ""], &["1", "2", "3", "4", "5"]]);
    let found = discover_employees(table.header(), table.width());

    assert_eq!(found.len(), 2);
    assert_eq!((found[0].name.as_str(), found[0].column), ("A", 0));
    assert_eq!((found[1].name.as_str(), found[1].column), ("B", 4));

    let days = day_records(&table, 4);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].index, 1);
    assert_eq!(days[0].start, RawCell::text("5"));
    assert_eq!(days[0].end, RawCell::Missing);
    assert!(days[0].is_empty());
}
