use crate::utils::time::{format_hms, hours_to_minutes, hours_to_seconds};
use serde::Serialize;

/// Accumulated working time of one employee column pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeResult {
    pub name: String,
    /// 0-based index of the clock-in column in the source table.
    pub column: usize,
    pub total_hours: f64,
    pub days_worked: u32,
    pub average_hours: f64,
    pub details: Vec<String>,
}

impl EmployeeResult {
    pub fn new(name: &str, column: usize) -> Self {
        Self {
            name: name.to_string(),
            column,
            total_hours: 0.0,
            days_worked: 0,
            average_hours: 0.0,
            details: Vec::new(),
        }
    }

    pub fn total_hms(&self) -> String {
        format_hms(self.total_hours)
    }

    pub fn total_minutes(&self) -> i64 {
        hours_to_minutes(self.total_hours)
    }

    pub fn total_seconds(&self) -> f64 {
        hours_to_seconds(self.total_hours)
    }
}
