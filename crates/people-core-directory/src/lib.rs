//! people-core-directory - read-only employee directory over a tabular source.

pub mod config;
pub mod directory;
pub mod error;
pub mod page;
pub mod record;

pub use config::{DirectoryConfig, HeaderLabels, MissingHeaderPolicy};
pub use directory::{EmployeeDirectoryService, FieldStats, NO_DATA, SampleReport};
pub use error::{DirectoryError, Result};
pub use page::{PageResponse, SandboxMode, render_entry_page};
pub use record::{EmployeeField, EmployeeRecord};

pub use people_core_sheets::{CsvDirectory, Sheet, TabularSource, Workbook};
