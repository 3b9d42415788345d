use serde::Serialize;

/// A time of day expressed in decimal hours, always within `[0, 24]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ParsedTime(f64);

impl ParsedTime {
    pub const DAY_HOURS: f64 = 24.0;

    pub fn from_hours(hours: f64) -> Option<Self> {
        if hours.is_finite() && (0.0..=Self::DAY_HOURS).contains(&hours) {
            Some(Self(hours))
        } else {
            None
        }
    }

    /// Builds `h + m/60 + s/3600`; components out of clock range are rejected.
    pub fn from_hms(h: u32, m: u32, s: u32) -> Option<Self> {
        if h > 24 || m > 59 || s > 59 {
            return None;
        }
        Self::from_hours(h as f64 + m as f64 / 60.0 + s as f64 / 3600.0)
    }

    pub fn hours(self) -> f64 {
        self.0
    }
}
