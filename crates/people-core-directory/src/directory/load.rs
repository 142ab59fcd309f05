use super::EmployeeDirectoryService;
use crate::config::{HeaderLabels, MissingHeaderPolicy};
use crate::error::{DirectoryError, Result};
use crate::record::{EmployeeField, EmployeeRecord};
use people_core_sheets::{CellRange, CellValue, TabularSource};
use tracing::{debug, error, warn};

/// Column index of each field in the data rows; `None` when unresolved.
struct ColumnMap([Option<usize>; 4]);

impl ColumnMap {
    fn resolve(
        header: &[CellValue],
        labels: &HeaderLabels,
        policy: MissingHeaderPolicy,
    ) -> Result<Self> {
        let mut columns = [None; 4];
        for field in EmployeeField::ALL {
            let label = labels.label(field);
            let position = header.iter().position(|cell| cell.matches_text(label));
            if position.is_none() {
                match policy {
                    MissingHeaderPolicy::Error => {
                        return Err(DirectoryError::MissingHeader {
                            label: label.to_string(),
                        });
                    }
                    MissingHeaderPolicy::Blank => {
                        warn!(%field, label, "header not found; field will be blank");
                    }
                }
            }
            columns[field as usize] = position;
        }
        Ok(ColumnMap(columns))
    }

    fn record(&self, row: &[CellValue]) -> EmployeeRecord {
        EmployeeRecord::from_fn(|field| {
            self.0[field as usize]
                .and_then(|col| row.get(col))
                .map(CellValue::to_field_string)
                .unwrap_or_default()
        })
    }
}

impl<S: TabularSource> EmployeeDirectoryService<S> {
    /// Read every data row of the employee sheet, in sheet order.
    ///
    /// A sheet with no data rows yields an empty list. Failures are logged
    /// and returned unchanged.
    pub fn load_all_employees(&self) -> Result<Vec<EmployeeRecord>> {
        self.read_employees().inspect_err(|err| {
            error!(sheet = %self.config.sheet_name, error = %err, "failed to load employees");
        })
    }

    fn read_employees(&self) -> Result<Vec<EmployeeRecord>> {
        let Some(sheet) = self.source.sheet(&self.config.sheet_name)? else {
            return Err(DirectoryError::SheetNotFound {
                sheet: self.config.sheet_name.clone(),
            });
        };

        let last_row = sheet.last_row();
        let last_column = sheet.last_column();
        if last_row < 2 {
            return Ok(Vec::new());
        }

        let header = sheet
            .get_values(&CellRange::new(1, 1, 1, last_column)?)?
            .into_iter()
            .next()
            .unwrap_or_default();
        let columns = ColumnMap::resolve(&header, &self.config.headers, self.config.missing_header)?;

        let rows = sheet.get_values(&CellRange::new(2, 1, last_row - 1, last_column)?)?;
        let employees: Vec<EmployeeRecord> = rows.iter().map(|row| columns.record(row)).collect();

        debug!(sheet = %sheet.name(), count = employees.len(), "loaded employees");
        Ok(employees)
    }
}
