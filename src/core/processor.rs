//! Turns a decoded table into per-employee results.
//!
//! Row 0 names the employees: every even column with a non-blank cell starts a
//! (clock-in, clock-out) pair. Each pair keeps its own result even when two
//! columns carry the same name.

use crate::core::calculator::aggregate;
use crate::core::runlog::RunLog;
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, HoursRange, RawCell, Table, TimesheetResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeColumn {
    pub name: String,
    /// Clock-in column; clock-out is `column + 1`.
    pub column: usize,
}

/// Scans the header left to right in steps of two.
///
/// A named column in last position has no clock-out partner and is not a pair.
pub fn discover_employees(header: &[RawCell], width: usize) -> Vec<EmployeeColumn> {
    (0..width)
        .step_by(2)
        .filter(|&i| i + 1 < width)
        .filter_map(|i| {
            header.get(i).and_then(RawCell::trimmed).map(|name| EmployeeColumn {
                name,
                column: i,
            })
        })
        .collect()
}

/// The day records of one column pair, indexed from 1.
pub fn day_records(table: &Table, column: usize) -> Vec<DayRecord> {
    (1..table.row_count())
        .map(|row| {
            DayRecord::new(
                row,
                table.cell(row, column).clone(),
                table.cell(row, column + 1).clone(),
            )
        })
        .collect()
}

pub fn process(table: &Table, range: HoursRange, log: &mut RunLog) -> AppResult<TimesheetResult> {
    log.step("👥 STEP 3: DETECTING EMPLOYEES");
    let header = table.header();
    log.debug(
        "employee",
        format!(
            "Row 1 (raw data): [{}]",
            header
                .iter()
                .map(|c| format!("'{c}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    );

    let width = table.width();
    if width % 2 == 1
        && let Some(name) = header.get(width - 1).and_then(RawCell::trimmed)
    {
        log.warn(
            "employee",
            format!("Column {} ('{}') has no clock-out column, ignored", width, name),
        );
    }

    let employees = discover_employees(header, width);
    if employees.is_empty() {
        return Err(AppError::NoEmployeesFound);
    }
    for e in &employees {
        log.info(
            "employee",
            format!("Column {}-{}: {}", e.column + 1, e.column + 2, e.name),
        );
    }
    log.info(
        "employee",
        format!(
            "✅ Employees: {}",
            employees
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    );

    let data_rows = table.data_rows().len();
    log.info("data", format!("📊 Data rows: {data_rows}"));

    log.step("🧮 STEP 4: CALCULATING HOURS");
    let results = employees
        .iter()
        .map(|e| aggregate(&e.name, e.column, &day_records(table, e.column), range, log))
        .collect();

    let result = TimesheetResult {
        employees: results,
        data_rows,
    };

    for name in result.duplicate_names() {
        log.warn(
            "employee",
            format!("Name '{name}' appears in more than one column pair; reported separately"),
        );
    }

    Ok(result)
}
