//! Entry page descriptor handed to the hosting front end.

use serde::Serialize;

pub const DEFAULT_PAGE_TITLE: &str = "People Core";

/// Template the front end renders for the entry page.
pub const ENTRY_TEMPLATE: &str = "index";

/// How the host isolates the rendered page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SandboxMode {
    #[default]
    Iframe,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageResponse {
    pub title: String,
    pub template: String,
    pub sandbox: SandboxMode,
}

impl PageResponse {
    pub fn new(title: impl Into<String>) -> Self {
        PageResponse {
            title: title.into(),
            template: ENTRY_TEMPLATE.to_string(),
            sandbox: SandboxMode::Iframe,
        }
    }
}

/// The default entry page: "People Core", sandboxed in an iframe.
pub fn render_entry_page() -> PageResponse {
    PageResponse::new(DEFAULT_PAGE_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_page() {
        let page = render_entry_page();
        assert_eq!(page.title, "People Core");
        assert_eq!(page.template, "index");
        assert_eq!(page.sandbox, SandboxMode::Iframe);
    }

    #[test]
    fn test_entry_page_json() {
        let json = serde_json::to_value(render_entry_page()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "People Core", "template": "index", "sandbox": "iframe"})
        );
    }
}
