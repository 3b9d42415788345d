//! Table decoding: turns a CSV or spreadsheet file into a `Table`.

mod delimited;
mod spreadsheet;

pub use self::delimited::{read_csv, read_csv_str};
pub use self::spreadsheet::{read_spreadsheet, serial_to_clock};

use crate::errors::{AppError, AppResult};
use crate::models::Table;
use crate::utils::path::extension;
use std::path::Path;

pub const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Picks the decoder from the file extension.
pub fn read_table(path: &Path) -> AppResult<Table> {
    let ext = extension(path);
    if ext == "csv" || ext == "txt" {
        read_csv(path)
    } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        read_spreadsheet(path)
    } else {
        Err(AppError::FileDecode {
            path: path.to_path_buf(),
            reason: format!("unsupported file type '.{ext}'"),
        })
    }
}
