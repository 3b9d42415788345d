use super::cell::RawCell;

static MISSING: RawCell = RawCell::Missing;

/// Rectangular grid of decoded cells; row 0 is the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<RawCell>>,
    width: usize,
}

impl Table {
    /// Pads short rows with `Missing` so every row has the same width.
    pub fn new(mut rows: Vec<Vec<RawCell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, RawCell::Missing);
        }
        Self { rows, width }
    }

    /// Convenience constructor for text grids; `""` becomes a missing cell.
    pub fn from_strings(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| {
                    r.iter()
                        .map(|s| {
                            if s.is_empty() {
                                RawCell::Missing
                            } else {
                                RawCell::text(*s)
                            }
                        })
                        .collect()
                })
                .collect(),
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self) -> &[RawCell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn data_rows(&self) -> &[Vec<RawCell>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn cell(&self, row: usize, col: usize) -> &RawCell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&MISSING)
    }
}
