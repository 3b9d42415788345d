use serde::Serialize;
use std::fmt;

/// One cell as decoded from the source table.
///
/// `Missing` is a cell with no value at all (empty CSV field, empty sheet cell,
/// padding past the end of a short row). `Text("")` is a present but empty value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RawCell {
    Missing,
    Text(String),
    Number(f64),
}

impl RawCell {
    pub fn text<S: Into<String>>(s: S) -> Self {
        RawCell::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawCell::Missing)
    }

    /// Missing, or present but only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            RawCell::Missing => true,
            RawCell::Text(s) => s.trim().is_empty(),
            RawCell::Number(v) => v.is_nan(),
        }
    }

    /// Trimmed textual form, `None` when the cell is blank.
    pub fn trimmed(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        Some(self.to_string().trim().to_string())
    }
}

impl fmt::Display for RawCell {
    /// Integral numbers keep a trailing `.0` (`1705.0`), the way spreadsheet
    /// numbers read back as floats.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Missing => Ok(()),
            RawCell::Text(s) => f.write_str(s),
            RawCell::Number(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{:.1}", v)
            }
            RawCell::Number(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

impl From<Option<&str>> for RawCell {
    fn from(s: Option<&str>) -> Self {
        s.map(RawCell::from).unwrap_or(RawCell::Missing)
    }
}
