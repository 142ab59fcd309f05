//! CSV directory backend: every `<sheet name>.csv` file in a directory is a sheet.

use crate::error::{Result, SheetError};
use crate::sheet::{Sheet, TabularSource};
use crate::value::CellValue;
use std::borrow::Cow;
use std::io::Read;
use std::path::PathBuf;

const MAX_SHEET_FILE_BYTES: u64 = 64 * 1_048_576; // 64 MiB

/// A directory of CSV files. Files are read on every lookup, never cached.
#[derive(Clone, Debug)]
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CsvDirectory { root: root.into() }
    }

    /// Sheet names present in the directory, sorted.
    pub fn sheet_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == "csv")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    // Names that would escape the directory never match a file.
    fn path_for(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return None;
        }
        Some(self.root.join(format!("{}.csv", name)))
    }
}

impl TabularSource for CsvDirectory {
    fn sheet(&self, name: &str) -> Result<Option<Cow<'_, Sheet>>> {
        let Some(path) = self.path_for(name) else {
            return Ok(None);
        };
        if !path.is_file() {
            return Ok(None);
        }

        let meta = std::fs::metadata(&path)?;
        if meta.len() > MAX_SHEET_FILE_BYTES {
            return Err(SheetError::TooLarge {
                path: path.display().to_string(),
                size: meta.len(),
                max: MAX_SHEET_FILE_BYTES,
            });
        }

        let file = std::fs::File::open(&path)?;
        Ok(Some(Cow::Owned(read_csv(name, file)?)))
    }
}

/// Read CSV content into a sheet. Every line is a row, the first one included.
pub fn read_csv<R: Read>(name: &str, reader: R) -> Result<Sheet> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut sheet = Sheet::new(name);
    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        sheet.push_row(record.iter().enumerate().map(|(col_idx, field)| {
            if row_idx == 0 && col_idx == 0 {
                parse_csv_field(field.trim_start_matches('\u{feff}'))
            } else {
                parse_csv_field(field)
            }
        }));
    }
    Ok(sheet)
}

/// Type a raw CSV field.
/// - blank -> Empty
/// - surrounding whitespace -> Text, kept verbatim
/// - leading zeros like "007" -> Text
/// - TRUE / FALSE (any case) -> Bool
/// - number whose display matches the field exactly -> Number
/// - otherwise -> Text
pub fn parse_csv_field(field: &str) -> CellValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if field != trimmed {
        return CellValue::text(field);
    }

    if trimmed.starts_with('0')
        && trimmed.len() > 1
        && !trimmed.starts_with("0.")
        && trimmed.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
    {
        return CellValue::text(trimmed);
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    // Only numbers that print back unchanged; "1E3", "1.50" and "inf" stay
    // text so identifiers are never rewritten.
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n.to_string() == trimmed => CellValue::Number(n),
        _ => CellValue::text(trimmed),
    }
}
