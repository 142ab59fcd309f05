use super::EmployeeDirectoryService;
use crate::error::{DirectoryError, Result};
use crate::record::{EmployeeField, EmployeeRecord};
use people_core_sheets::TabularSource;
use std::collections::BTreeSet;
use tracing::debug;

impl<S: TabularSource> EmployeeDirectoryService<S> {
    /// First employee whose ID equals `employee_id` exactly.
    pub fn get_employee_detail(&self, employee_id: &str) -> Result<EmployeeRecord> {
        self.load_all_employees()?
            .into_iter()
            .find(|e| e.employee_id == employee_id)
            .ok_or_else(|| DirectoryError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Sorted distinct non-empty values of the field called `field_name`.
    ///
    /// The sheet is always read, so load failures surface even for unknown
    /// field names; an unknown name then yields an empty list.
    pub fn get_unique_field_values(&self, field_name: &str) -> Result<Vec<String>> {
        let employees = self.load_all_employees()?;
        match EmployeeField::from_name(field_name) {
            Some(field) => Ok(distinct_sorted(&employees, field)),
            None => {
                debug!(field_name, "unknown employee field");
                Ok(Vec::new())
            }
        }
    }

    /// Sorted distinct non-empty values of `field`.
    pub fn unique_values(&self, field: EmployeeField) -> Result<Vec<String>> {
        Ok(distinct_sorted(&self.load_all_employees()?, field))
    }
}

fn distinct_sorted(employees: &[EmployeeRecord], field: EmployeeField) -> Vec<String> {
    let values: BTreeSet<&str> = employees
        .iter()
        .map(|e| field.get(e))
        .filter(|v| !v.is_empty())
        .collect();
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fixtures::{FailingSource, employee_book};
    use people_core_sheets::Workbook;

    fn service() -> EmployeeDirectoryService<Workbook> {
        EmployeeDirectoryService::with_defaults(employee_book(&[
            ["E1", "佐藤", "A", "TRUE"],
            ["E2", "鈴木", "B", "TRUE"],
            ["E3", "高橋", "", ""],
            ["E4", "田中", "A", "FALSE"],
            ["E5", "伊藤", "C", "TRUE"],
        ]))
    }

    #[test]
    fn test_detail_returns_matching_record() {
        let employee = service().get_employee_detail("E2").unwrap();
        assert_eq!(employee, EmployeeRecord::new("E2", "鈴木", "B", "TRUE"));
    }

    #[test]
    fn test_detail_returns_first_of_duplicates() {
        let service = EmployeeDirectoryService::with_defaults(employee_book(&[
            ["E1", "first", "", ""],
            ["E1", "second", "", ""],
        ]));
        assert_eq!(service.get_employee_detail("E1").unwrap().name, "first");
    }

    #[test]
    fn test_detail_match_is_exact() {
        let err = service().get_employee_detail("e2").unwrap_err();
        assert!(matches!(err, DirectoryError::EmployeeNotFound { ref employee_id } if employee_id == "e2"));
        assert!(err.is_not_found());
        assert!(service().get_employee_detail("E9").is_err());
    }

    #[test]
    fn test_detail_propagates_missing_sheet() {
        let service = EmployeeDirectoryService::with_defaults(Workbook::new());
        let err = service.get_employee_detail("E1").unwrap_err();
        assert!(matches!(err, DirectoryError::SheetNotFound { .. }));
    }

    #[test]
    fn test_unique_values_sorted_without_blanks() {
        let values = service().get_unique_field_values("employmentType").unwrap();
        assert_eq!(values, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unique_values_by_source_label() {
        let values = service().get_unique_field_values("在籍中フラグ").unwrap();
        assert_eq!(values, vec!["FALSE", "TRUE"]);
    }

    #[test]
    fn test_unique_values_unknown_field_is_empty() {
        let values = service().get_unique_field_values("nonExistentField").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_unique_values_unknown_field_still_reads_sheet() {
        let service = EmployeeDirectoryService::with_defaults(Workbook::new());
        let err = service.get_unique_field_values("nonExistentField").unwrap_err();
        assert!(matches!(err, DirectoryError::SheetNotFound { .. }));

        let service = EmployeeDirectoryService::with_defaults(FailingSource);
        let err = service.get_unique_field_values("nonExistentField").unwrap_err();
        assert!(matches!(err, DirectoryError::Source(_)));
    }

    #[test]
    fn test_unique_values_typed() {
        let values = service().unique_values(EmployeeField::EmployeeId).unwrap();
        assert_eq!(values, vec!["E1", "E2", "E3", "E4", "E5"]);
    }

    #[test]
    fn test_unique_values_propagates_source_errors() {
        let service = EmployeeDirectoryService::with_defaults(FailingSource);
        assert!(service.get_unique_field_values("name").is_err());
    }
}
