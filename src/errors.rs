//! Unified application error type.
//! Parser, grouping, export and CLI layers all return AppError so that the
//! recoverable per-line failures and the fatal file-level ones share a shape.

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

    #[error("Cannot open input file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Parsing errors (per line, recovered)
    // ---------------------------
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Invalid time inside message: {0}")]
    InvalidExtractedTime(String),

    #[error("Invalid line format: {0}")]
    InvalidLineFormat(String),

    // ---------------------------
    // Rendering errors (per bucket / cell, recovered)
    // ---------------------------
    #[error("Date cannot be written to the report: {0}")]
    InvalidGroupedDateKey(String),

    #[error("Failed to write cell: {0}")]
    RowWrite(String),

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
    // Export errors
    // ---------------------------
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
