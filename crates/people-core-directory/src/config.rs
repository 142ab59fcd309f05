//! Directory configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.

use crate::page::DEFAULT_PAGE_TITLE;
use crate::record::EmployeeField;
use serde::Deserialize;

/// The Employee sheet's name in the source workbook.
pub const DEFAULT_SHEET_NAME: &str = "従業員";

/// Records printed in full by the diagnostic report.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    pub sheet_name: String,
    pub page_title: String,
    pub sample_size: usize,
    pub missing_header: MissingHeaderPolicy,
    pub headers: HeaderLabels,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            missing_header: MissingHeaderPolicy::default(),
            headers: HeaderLabels::default(),
        }
    }
}

/// Header-row labels each field is read from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderLabels {
    pub employee_id: String,
    pub name: String,
    pub employment_type: String,
    pub active_flag: String,
}

impl HeaderLabels {
    pub fn label(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::Name => &self.name,
            EmployeeField::EmploymentType => &self.employment_type,
            EmployeeField::ActiveFlag => &self.active_flag,
        }
    }
}

impl Default for HeaderLabels {
    fn default() -> Self {
        HeaderLabels {
            employee_id: EmployeeField::EmployeeId.default_label().to_string(),
            name: EmployeeField::Name.default_label().to_string(),
            employment_type: EmployeeField::EmploymentType.default_label().to_string(),
            active_flag: EmployeeField::ActiveFlag.default_label().to_string(),
        }
    }
}

/// What to do when a configured header label is absent from the header row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingHeaderPolicy {
    /// Fail the load with `DirectoryError::MissingHeader`.
    #[default]
    Error,
    /// Keep loading; the field is `""` in every record.
    Blank,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config: DirectoryConfig = toml::from_str("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.sheet_name, "従業員");
        assert_eq!(config.headers.label(EmployeeField::Name), "名前");
    }

    #[test]
    fn test_partial_override() {
        let config: DirectoryConfig = toml::from_str(
            r#"
            sheet_name = "Employee"
            missing_header = "blank"

            [headers]
            employee_id = "EmployeeID"
            "#,
        )
        .unwrap();
        assert_eq!(config.sheet_name, "Employee");
        assert_eq!(config.missing_header, MissingHeaderPolicy::Blank);
        assert_eq!(config.headers.employee_id, "EmployeeID");
        assert_eq!(config.headers.active_flag, "在籍中フラグ");
        assert_eq!(config.sample_size, 3);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<DirectoryConfig>("sheet = \"x\"").is_err());
        assert!(toml::from_str::<DirectoryConfig>("[headers]\nid = \"x\"").is_err());
    }
}
