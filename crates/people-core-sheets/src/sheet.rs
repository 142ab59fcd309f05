//! Sheets, workbooks and the `TabularSource` seam.

use crate::address::{CellRange, CellRef};
use crate::error::Result;
use crate::value::CellValue;
use std::borrow::Cow;

/// Read-only access to a set of named sheets.
///
/// Implementations decide whether a sheet is borrowed from memory or read
/// fresh from storage on every call.
pub trait TabularSource {
    /// Look a sheet up by exact name. `Ok(None)` means no such sheet.
    fn sheet(&self, name: &str) -> Result<Option<Cow<'_, Sheet>>>;
}

impl<T: TabularSource + ?Sized> TabularSource for &T {
    fn sheet(&self, name: &str) -> Result<Option<Cow<'_, Sheet>>> {
        (**self).sheet(name)
    }
}

/// A named grid of cells stored row-major. Rows may be ragged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Sheet {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push_row<I, V>(&mut self, row: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Builder form of `push_row`.
    pub fn with_row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.push_row(row);
        self
    }

    /// 1-based index of the last row holding a non-empty cell, 0 if none.
    pub fn last_row(&self) -> usize {
        self.rows
            .iter()
            .rposition(|row| row.iter().any(|c| !c.is_empty()))
            .map_or(0, |idx| idx + 1)
    }

    /// 1-based index of the last column holding a non-empty cell in any
    /// row, 0 if none.
    pub fn last_column(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.iter().rposition(|c| !c.is_empty()))
            .max()
            .map_or(0, |idx| idx + 1)
    }

    pub fn get_value(&self, cell: CellRef) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .unwrap_or(&EMPTY)
    }

    /// Copy a rectangular range out as a dense grid. Cells outside the
    /// stored area read as `Empty`.
    pub fn get_values(&self, range: &CellRange) -> Result<Vec<Vec<CellValue>>> {
        let start = range.start();
        let grid = (0..range.num_rows)
            .map(|r| {
                (0..range.num_columns)
                    .map(|c| {
                        self.get_value(CellRef::new(start.col + c, start.row + r))
                            .clone()
                    })
                    .collect()
            })
            .collect();
        Ok(grid)
    }
}

/// An in-memory collection of sheets, kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet, replacing any existing sheet with the same name.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        match self.sheets.iter_mut().find(|s| s.name == sheet.name) {
            Some(existing) => *existing = sheet,
            None => self.sheets.push(sheet),
        }
    }

    pub fn with_sheet(mut self, sheet: Sheet) -> Self {
        self.add_sheet(sheet);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

impl TabularSource for Workbook {
    fn sheet(&self, name: &str) -> Result<Option<Cow<'_, Sheet>>> {
        Ok(self.get(name).map(Cow::Borrowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sheet {
        Sheet::new("Data")
            .with_row(["id", "name"])
            .with_row(["1", "Ann"])
            .with_row(["2", ""])
    }

    #[test]
    fn test_used_extent() {
        let sheet = sample();
        assert_eq!(sheet.last_row(), 3);
        assert_eq!(sheet.last_column(), 2);
    }

    #[test]
    fn test_used_extent_ignores_trailing_blanks() {
        let sheet = Sheet::new("Data")
            .with_row(["a", "", ""])
            .with_row(["", "b", ""])
            .with_row(["", "", ""]);
        assert_eq!(sheet.last_row(), 2);
        assert_eq!(sheet.last_column(), 2);
    }

    #[test]
    fn test_empty_sheet_extent_is_zero() {
        let sheet = Sheet::new("Empty");
        assert_eq!(sheet.last_row(), 0);
        assert_eq!(sheet.last_column(), 0);
    }

    #[test]
    fn test_get_values_pads_with_empty() {
        let sheet = Sheet::new("Ragged").with_row(["a"]).with_row(["b", "c"]);
        let grid = sheet.get_values(&CellRange::new(1, 1, 2, 3).unwrap()).unwrap();
        assert_eq!(
            grid,
            vec![
                vec![CellValue::text("a"), CellValue::Empty, CellValue::Empty],
                vec![CellValue::text("b"), CellValue::text("c"), CellValue::Empty],
            ]
        );
    }

    #[test]
    fn test_get_values_offset_range() {
        let sheet = sample();
        let grid = sheet.get_values(&CellRange::new(2, 2, 2, 1).unwrap()).unwrap();
        assert_eq!(grid, vec![vec![CellValue::text("Ann")], vec![CellValue::Empty]]);
    }

    #[test]
    fn test_workbook_lookup_is_exact() {
        let book = Workbook::new().with_sheet(sample());
        assert!(book.sheet("Data").unwrap().is_some());
        assert!(book.sheet("data").unwrap().is_none());
    }

    #[test]
    fn test_workbook_replaces_same_name() {
        let book = Workbook::new()
            .with_sheet(sample())
            .with_sheet(Sheet::new("Data").with_row(["only"]));
        assert_eq!(book.get("Data").unwrap().last_row(), 1);
        assert!(book.get("Other").is_none());
    }
}
