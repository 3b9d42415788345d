//! Unified application error type.
//! Every step of a run (config, input, processing, archive) returns AppError
//! so the driver can log a single top-level message and stop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input file
    // ---------------------------
    #[error("No input file found in '{}' (patterns: {})", dir.display(), patterns.join(", "))]
    NoInputFileFound { dir: PathBuf, patterns: Vec<String> },

    #[error("Error reading file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error decoding file '{}': {reason}", path.display())]
    FileDecode { path: PathBuf, reason: String },

    // ---------------------------
    // Processing
    // ---------------------------
    #[error("No employees found in row 1")]
    NoEmployeesFound,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Failed to create archive folder: {0}")]
    ArchiveCreation(String),

    #[error("Error saving results: {0}")]
    ReportWrite(String),

    #[error("Copying original file failed: {0}")]
    OriginalCopy(String),

    #[error("Failed to write run log: {0}")]
    LogWrite(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors that end the run. A failed copy of the original is only reported.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::OriginalCopy(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
