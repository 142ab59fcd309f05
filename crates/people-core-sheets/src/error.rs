//! Error types for tabular sources.

use thiserror::Error;

/// Errors raised while reading a tabular source
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Sheet file too large: {path} ({size} bytes, max {max})")]
    TooLarge { path: String, size: u64, max: u64 },

    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
