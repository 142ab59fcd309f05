use crate::config::DirectoryConfig;
use crate::page::PageResponse;
use people_core_sheets::TabularSource;

/// Read-only employee directory bound to one source.
///
/// The service keeps no state between calls: every operation re-reads the
/// configured sheet through the source.
pub struct EmployeeDirectoryService<S> {
    pub(super) source: S,
    pub(super) config: DirectoryConfig,
}

impl<S: TabularSource> EmployeeDirectoryService<S> {
    pub fn new(source: S, config: DirectoryConfig) -> Self {
        EmployeeDirectoryService { source, config }
    }

    /// Bind to `source` with the default sheet name and header labels.
    pub fn with_defaults(source: S) -> Self {
        Self::new(source, DirectoryConfig::default())
    }

    /// Entry page descriptor using the configured title.
    pub fn render_entry_page(&self) -> PageResponse {
        PageResponse::new(self.config.page_title.as_str())
    }
}
