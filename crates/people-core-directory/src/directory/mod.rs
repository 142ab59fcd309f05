//! The employee directory service (UI-agnostic).

mod load;
mod lookup;
mod report;
mod state;

pub use report::{FieldStats, NO_DATA, SampleReport};
pub use state::EmployeeDirectoryService;
