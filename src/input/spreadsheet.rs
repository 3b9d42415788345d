use crate::errors::{AppError, AppResult};
use crate::models::{RawCell, Table};
use calamine::{Data, Reader};
use std::path::Path;

/// Reads the first worksheet of an Excel/ODS workbook.
///
/// Leading empty rows are dropped; leading empty columns are kept so that
/// column pairs stay aligned with the sheet.
pub fn read_spreadsheet(path: &Path) -> AppResult<Table> {
    let decode_err = |reason: String| AppError::FileDecode {
        path: path.to_path_buf(),
        reason,
    };

    let mut book = calamine::open_workbook_auto(path).map_err(|e| decode_err(e.to_string()))?;
    let range = book
        .worksheet_range_at(0)
        .ok_or_else(|| decode_err("workbook has no sheets".to_string()))?
        .map_err(|e| decode_err(e.to_string()))?;

    let col_offset = range.start().map(|(_, c)| c as usize).unwrap_or(0);

    let rows = range
        .rows()
        .map(|row| {
            let mut cells = vec![RawCell::Missing; col_offset];
            cells.extend(row.iter().map(cell_from_data));
            cells
        })
        .skip_while(|cells| cells.iter().all(RawCell::is_blank))
        .collect();

    Ok(Table::new(rows))
}

fn cell_from_data(data: &Data) -> RawCell {
    match data {
        Data::Empty => RawCell::Missing,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Text(b.to_string()),
        Data::DateTime(dt) => RawCell::Text(serial_to_clock(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(e) => RawCell::Text(e.to_string()),
    }
}

/// Time-of-day part of a spreadsheet date serial as `HH:MM:SS`.
pub fn serial_to_clock(serial: f64) -> String {
    let secs = (serial.fract().abs() * 86_400.0).round() as u32;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
