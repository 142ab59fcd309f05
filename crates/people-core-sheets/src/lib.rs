//! people-core-sheets - read-only tabular data source.
//!
//! A source is a set of named sheets. Each sheet answers two questions:
//! how far its used area extends, and what values sit in a rectangular range.

pub mod address;
pub mod error;
pub mod sheet;
pub mod storage;
pub mod value;

pub use address::{CellRange, CellRef};
pub use error::{Result, SheetError};
pub use sheet::{Sheet, TabularSource, Workbook};
pub use storage::CsvDirectory;
pub use value::CellValue;
