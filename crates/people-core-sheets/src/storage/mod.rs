//! File-backed sources.

mod csv;

pub use self::csv::{CsvDirectory, parse_csv_field, read_csv};
