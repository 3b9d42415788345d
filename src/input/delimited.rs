use crate::errors::{AppError, AppResult};
use crate::models::{RawCell, Table};
use std::fs;
use std::path::Path;

/// Reads a delimited text file. No header handling: row 0 is data like any other.
pub fn read_csv(path: &Path) -> AppResult<Table> {
    let bytes = fs::read(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| AppError::FileDecode {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8: {e}"),
    })?;

    read_csv_str(&text).map_err(|e| AppError::FileDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Decodes CSV text. `;` is used as delimiter when the first line has more
/// semicolons than commas (decimal-comma locales export that way).
pub fn read_csv_str(text: &str) -> Result<Table, csv::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(text))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        RawCell::Missing
                    } else {
                        RawCell::text(field)
                    }
                })
                .collect(),
        );
    }

    Ok(Table::new(rows))
}

fn sniff_delimiter(text: &str) -> u8 {
    let first = text.lines().next().unwrap_or("");
    let semicolons = first.matches(';').count();
    let commas = first.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}
