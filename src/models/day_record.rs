use super::cell::RawCell;

/// The (clock-in, clock-out) pair of one employee on one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    /// 1-based row index, used only in the detail trace.
    pub index: usize,
    pub start: RawCell,
    pub end: RawCell,
}

impl DayRecord {
    pub fn new(index: usize, start: RawCell, end: RawCell) -> Self {
        Self { index, start, end }
    }

    /// A day with either side blank is "no entry" and is skipped entirely.
    pub fn is_empty(&self) -> bool {
        self.start.is_blank() || self.end.is_blank()
    }
}
