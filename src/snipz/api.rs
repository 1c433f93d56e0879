//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for snipz operations, whatever UI sits on top.
//!
//! The facade:
//! - **Owns** the loaded [`Catalog`] for the lifetime of the client
//! - **Normalizes inputs** (raw selection text → [`DottedPath`])
//! - **Dispatches** to the command functions
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never decides how an error is shown. The session loop
//! turns every [`crate::error::ResolutionError`] into "Invalid selection." on its own.

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::menu::{self, MenuLines};
use crate::path::DottedPath;
use std::path::Path;

pub use crate::commands::config::ConfigAction;

/// Read-only access to one catalog.
pub struct SnipzApi {
    catalog: Catalog,
}

impl SnipzApi {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Lazily rendered menu, for callers that print as they go.
    pub fn menu(&self) -> MenuLines<'_> {
        menu::render_node(self.catalog.root())
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.catalog)
    }

    /// Selects the snippet at `selection`, a dotted path such as `2.1`.
    pub fn show(&self, selection: &str) -> Result<CmdResult> {
        let path = DottedPath::from(selection);
        commands::show::run(&self.catalog, &path)
    }
}

/// Config does not depend on a catalog, so it works even when the configured
/// catalog file is broken.
pub fn configure(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnipzError;

    fn api() -> SnipzApi {
        SnipzApi::new(Catalog::from_json_str(r#"{"A": {"x1": "  hello  "}, "B": {}}"#).unwrap())
    }

    #[test]
    fn test_menu_and_list_agree() {
        let api = api();
        let lazy: Vec<String> = api.menu().map(|l| l.to_string()).collect();
        let listed: Vec<String> = api.list().menu.iter().map(|l| l.to_string()).collect();
        assert_eq!(lazy, listed);
    }

    #[test]
    fn test_show_parses_selection() {
        let api = api();
        let result = api.show("A.1").unwrap();
        assert_eq!(result.snippet.unwrap().text, "hello");
    }

    #[test]
    fn test_show_error_kinds() {
        let api = api();
        assert!(matches!(api.show("9"), Err(SnipzError::Resolution(_))));
        assert!(matches!(api.show("2"), Err(SnipzError::NotASnippet(_))));
    }

    #[test]
    fn test_configure_dispatches() {
        let dir = tempfile::tempdir().unwrap();
        let result = configure(dir.path(), ConfigAction::ShowAll).unwrap();
        assert!(result.config.is_some());
    }
}
