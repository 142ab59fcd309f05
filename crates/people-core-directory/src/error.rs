//! Error types for the employee directory.

use people_core_sheets::SheetError;
use thiserror::Error;

/// Errors that can occur while serving directory requests
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{sheet} sheet not found")]
    SheetNotFound { sheet: String },

    #[error("specified employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: String },

    #[error("header '{label}' not found in header row")]
    MissingHeader { label: String },

    #[error("source access error: {0}")]
    Source(#[from] SheetError),
}

impl DirectoryError {
    /// Missing sheet or missing employee.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DirectoryError::SheetNotFound { .. } | DirectoryError::EmployeeNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
