//! Cell and range addressing.
//!
//! `CellRef` is zero-indexed. `CellRange` follows the sheet convention of
//! 1-based top-left coordinates plus an extent, so `CellRange::new(2, 1, 3, 4)`
//! covers rows 2..=4 of columns 1..=4.

use crate::error::{Result, SheetError};

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }
}

/// A non-empty rectangle of cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellRange {
    /// First row, 1-based.
    pub row: usize,
    /// First column, 1-based.
    pub column: usize,
    pub num_rows: usize,
    pub num_columns: usize,
}

impl CellRange {
    pub fn new(row: usize, column: usize, num_rows: usize, num_columns: usize) -> Result<Self> {
        if row == 0 || column == 0 {
            return Err(SheetError::InvalidRange(format!(
                "coordinates are 1-based, got row {} column {}",
                row, column
            )));
        }
        if num_rows == 0 || num_columns == 0 {
            return Err(SheetError::InvalidRange(format!(
                "empty extent {}x{}",
                num_rows, num_columns
            )));
        }
        Ok(CellRange {
            row,
            column,
            num_rows,
            num_columns,
        })
    }

    /// Top-left corner.
    pub fn start(&self) -> CellRef {
        CellRef::new(self.column - 1, self.row - 1)
    }
}
