//! Diagnostic report over the loaded employee data.

use super::EmployeeDirectoryService;
use crate::config::HeaderLabels;
use crate::error::Result;
use crate::record::{EmployeeField, EmployeeRecord};
use people_core_sheets::TabularSource;
use tracing::{error, info};

/// Returned by the text report when the sheet has no data rows.
pub const NO_DATA: &str = "データなし";

/// Fill statistics for one field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStats {
    pub field: EmployeeField,
    pub total: usize,
    pub non_empty: usize,
}

impl FieldStats {
    /// Percentage of records where the field is blank.
    pub fn empty_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.total - self.non_empty) as f64 / self.total as f64 * 100.0
    }

    /// Empty rate to one decimal place, halves rounded up: `"12.5%"`.
    pub fn empty_rate_label(&self) -> String {
        let rounded = (self.empty_rate() * 10.0).round() / 10.0;
        format!("{:.1}%", rounded)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SampleReport {
    pub total: usize,
    pub samples: Vec<EmployeeRecord>,
    pub stats: Vec<FieldStats>,
}

impl SampleReport {
    pub fn from_records(records: &[EmployeeRecord], sample_size: usize) -> Self {
        let stats = EmployeeField::ALL
            .into_iter()
            .map(|field| FieldStats {
                field,
                total: records.len(),
                non_empty: records.iter().filter(|r| !field.get(r).is_empty()).count(),
            })
            .collect();

        SampleReport {
            total: records.len(),
            samples: records.iter().take(sample_size).cloned().collect(),
            stats,
        }
    }

    /// Human-readable report lines, fields named by their header labels.
    pub fn lines(&self, labels: &HeaderLabels) -> Vec<String> {
        let mut lines = vec![format!("取得された従業員数: {}", self.total)];

        lines.push(format!("最初の{}件のデータ:", self.samples.len()));
        for (idx, employee) in self.samples.iter().enumerate() {
            lines.push(format!("--- 従業員 {} ---", idx + 1));
            for (field, value) in employee.fields() {
                lines.push(format!("{}: {}", labels.label(field), value));
            }
        }

        lines.push("各列の入力状況:".to_string());
        for stat in &self.stats {
            lines.push(format!(
                "{}: {}/{} (空白率: {})",
                labels.label(stat.field),
                stat.non_empty,
                stat.total,
                stat.empty_rate_label()
            ));
        }
        lines
    }

    pub fn summary(&self) -> String {
        format!("{}件のデータを取得しました", self.total)
    }
}

impl<S: TabularSource> EmployeeDirectoryService<S> {
    /// Structured statistics; load failures are returned unchanged.
    pub fn sample_report(&self) -> Result<SampleReport> {
        let employees = self.load_all_employees()?;
        Ok(SampleReport::from_records(&employees, self.config.sample_size))
    }

    /// Log a sample of the data plus fill statistics and return a one-line
    /// summary. Never fails: a load error comes back as `"エラー: ..."`.
    pub fn debug_sample_data_report(&self) -> String {
        info!("=== sample data check started ===");

        let summary = match self.sample_report() {
            Err(err) => {
                error!(error = %err, "sample data check failed");
                return format!("エラー: {}", err);
            }
            Ok(report) if report.total == 0 => {
                info!("no employee data found");
                NO_DATA.to_string()
            }
            Ok(report) => {
                for line in report.lines(&self.config.headers) {
                    info!("{}", line);
                }
                report.summary()
            }
        };

        info!("=== sample data check finished ===");
        summary
    }
}
