use crate::catalog::{Catalog, CatalogNode};
use crate::commands::{CmdResult, SelectedSnippet};
use crate::error::{Result, SnipzError};
use crate::path::{resolve_entry, DottedPath};

/// Resolves `path` to a snippet. Landing on a category is an incomplete
/// selection, not something to print.
pub fn run(catalog: &Catalog, path: &DottedPath) -> Result<CmdResult> {
    let resolved = resolve_entry(catalog.root(), path).inspect_err(|e| {
        tracing::debug!(path = %path, error = %e, "selection did not resolve");
    })?;

    match resolved.node {
        CatalogNode::Leaf(snippet) => Ok(CmdResult::default().with_snippet(SelectedSnippet {
            path: path.to_string(),
            name: resolved.name.unwrap_or_default().to_string(),
            text: snippet.display_text().to_string(),
        })),
        CatalogNode::Interior(_) => Err(SnipzError::NotASnippet(path.to_string())),
    }
}
