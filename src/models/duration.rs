use serde::{Deserialize, Serialize};

/// Plausible shift length, exclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursRange {
    pub min_hours: f64,
    pub max_hours: f64,
}

impl Default for HoursRange {
    fn default() -> Self {
        Self {
            min_hours: 0.0,
            max_hours: 24.0,
        }
    }
}

impl HoursRange {
    pub fn new(min_hours: f64, max_hours: f64) -> Self {
        Self {
            min_hours,
            max_hours,
        }
    }

    pub fn contains(&self, hours: f64) -> bool {
        self.min_hours < hours && hours < self.max_hours
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvalidReason {
    /// At or below the minimum (a zero-length shift lands here).
    TooShort,
    /// At or above the maximum (an exactly 24h shift lands here).
    TooLong,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::TooShort => "too short",
            InvalidReason::TooLong => "too long",
        }
    }
}

/// Result of combining the two parsed times of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DurationOutcome {
    Valid { hours: f64, rolled_over: bool },
    Invalid { reason: InvalidReason, raw_diff: f64 },
    Unparseable,
}

impl DurationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, DurationOutcome::Valid { .. })
    }

    pub fn hours(&self) -> Option<f64> {
        match self {
            DurationOutcome::Valid { hours, .. } => Some(*hours),
            _ => None,
        }
    }
}
