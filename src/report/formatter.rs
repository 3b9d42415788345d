use crate::config::Config;
use crate::models::{EmployeeResult, TimesheetResult};
use crate::utils::date::format_datetime;
use crate::utils::formatting::{centered_rule, rule};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_seconds;
use chrono::NaiveDateTime;

const BANNER_WIDTH: usize = 123;
const RULE_WIDTH: usize = 120;

/// Renders a `TimesheetResult` as the plain-text report.
///
/// Output depends only on the arguments, so the same input always yields the
/// same bytes.
pub struct ReportFormatter {
    date_format: String,
    log_file_name: String,
}

impl ReportFormatter {
    pub fn new(cfg: &Config) -> Self {
        Self {
            date_format: cfg.result_date_format.clone(),
            log_file_name: cfg.log_file_name(),
        }
    }

    pub fn format(
        &self,
        result: &TimesheetResult,
        original_file_name: &str,
        generated_at: &NaiveDateTime,
    ) -> String {
        let mut out = String::new();
        out.push_str(&banner("📊 WORKING HOURS - SUMMARY"));
        out.push('\n');
        out.push_str(&summary_table(result));
        out.push('\n');
        out.push_str(&banner("📋 DETAILS BY EMPLOYEE"));
        out.push('\n');
        out.push_str(&result.details_text());
        out.push('\n');
        out.push_str(&banner("Completed"));
        out.push('\n');
        out.push_str(&format!("📁 Original file: {original_file_name}\n"));
        out.push_str(&format!(
            "📅 Calculated on: {}\n",
            format_datetime(generated_at, &self.date_format)
        ));
        out.push_str(&format!("📋 Log file: {}\n", self.log_file_name));
        out.push('\n');
        out.push_str(&rule(BANNER_WIDTH, '='));
        out.push('\n');
        out
    }
}

fn banner(title: &str) -> String {
    format!(
        "{line}\n{}\n{line}\n",
        centered_rule(title, BANNER_WIDTH, '='),
        line = rule(BANNER_WIDTH, '=')
    )
}

fn summary_table(result: &TimesheetResult) -> String {
    let mut table = Table::new(
        vec![
            Column::left("Employee", 30),
            Column::right("Total (h/m/s)", 20),
            Column::right("Total (h)", 12),
            Column::right("Total (m)", 12),
            Column::right("Total (s)", 12),
            Column::right("Days", 8),
        ],
        RULE_WIDTH,
    );

    for e in &result.employees {
        table.add_row(totals_row(&result.label(e), e));
    }
    table.add_rule();

    let mut all = EmployeeResult::new("ALL EMPLOYEES", 0);
    all.total_hours = result.total_hours();
    all.days_worked = result.total_days();
    table.add_row(totals_row(&all.name, &all));

    table.render()
}

fn totals_row(label: &str, e: &EmployeeResult) -> Vec<String> {
    vec![
        label.to_string(),
        e.total_hms(),
        format!("{:.2}", e.total_hours),
        e.total_minutes().to_string(),
        format_seconds(e.total_seconds()),
        e.days_worked.to_string(),
    ]
}
