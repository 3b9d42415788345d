use super::employee::EmployeeResult;
use crate::utils::formatting::rule;
use std::collections::HashMap;

const DETAILS_RULE_WIDTH: usize = 123;

/// Everything computed from one timesheet, in source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimesheetResult {
    pub employees: Vec<EmployeeResult>,
    pub data_rows: usize,
}

impl TimesheetResult {
    /// First employee carrying `name`.
    pub fn get(&self, name: &str) -> Option<&EmployeeResult> {
        self.employees.iter().find(|e| e.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.employees.iter().map(|e| e.name.as_str()).collect()
    }

    /// Names used by more than one column pair, in first-seen order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let counts = self.name_counts();
        let mut out: Vec<&str> = Vec::new();
        for e in &self.employees {
            if counts[e.name.as_str()] > 1 && !out.contains(&e.name.as_str()) {
                out.push(&e.name);
            }
        }
        out
    }

    /// Display label: the name, or `name [col N]` when the name is ambiguous.
    pub fn label(&self, employee: &EmployeeResult) -> String {
        if self.name_counts()[employee.name.as_str()] > 1 {
            format!("{} [col {}]", employee.name, employee.column + 1)
        } else {
            employee.name.clone()
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.employees.iter().map(|e| e.total_hours).sum()
    }

    pub fn total_days(&self) -> u32 {
        self.employees.iter().map(|e| e.days_worked).sum()
    }

    /// Concatenated per-employee trace, each block headed by the employee label
    /// and separated from the previous one by a rule line.
    pub fn details_text(&self) -> String {
        let mut out = String::new();
        for (i, e) in self.employees.iter().enumerate() {
            if i > 0 {
                out.push_str(&rule(DETAILS_RULE_WIDTH, '-'));
                out.push('\n');
            }
            out.push_str(&format!("👤 {}:\n", self.label(e)));
            for line in &e.details {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    fn name_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for e in &self.employees {
            *counts.entry(e.name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
