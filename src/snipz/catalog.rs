//! # Catalog
//!
//! The catalog is an ordered tree: every node is either a [`Category`] holding
//! named children, or a [`Snippet`] holding opaque text. Order matters because
//! a child's position (1-based, in insertion order) is how users address it.
//!
//! A catalog is built once and then only read. Nothing in this crate mutates a
//! catalog after [`Catalog::new`] hands it out.
//!
//! ## Documents
//!
//! Catalogs are stored as JSON: an object is a category, a string is a snippet.
//! Key order in the document becomes position order, so the same file always
//! renders the same numbered menu. Duplicate keys inside one object are rejected.
//!
//! ```json
//! {
//!   "Command Line Arguments": {
//!     "basic argparse usage": "import argparse\n..."
//!   }
//! }
//! ```

use crate::error::{CatalogError, Result};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// A snippet body. Stored verbatim; only trimmed for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    body: String,
}

impl Snippet {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The stored payload, untouched.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The payload with surrounding whitespace removed.
    pub fn display_text(&self) -> &str {
        self.body.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    node: CatalogNode,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &CatalogNode {
        &self.node
    }
}

/// An ordered group of uniquely named children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    entries: Vec<Entry>,
}

impl Category {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a category from `(name, node)` pairs, keeping their order.
    pub fn from_entries<I, N>(entries: I) -> std::result::Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (N, CatalogNode)>,
        N: Into<String>,
    {
        let mut category = Self::new();
        for (name, node) in entries {
            category.insert(name, node)?;
        }
        Ok(category)
    }

    /// Appends a child. Fails if a sibling already uses `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: CatalogNode,
    ) -> std::result::Result<(), CatalogError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(CatalogError::DuplicateName(name));
        }
        self.entries.push(Entry { name, node });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Child at a 1-based position.
    pub fn nth(&self, position: usize) -> Option<&Entry> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    Interior(Category),
    Leaf(Snippet),
}

impl CatalogNode {
    pub fn leaf(body: impl Into<String>) -> Self {
        CatalogNode::Leaf(Snippet::new(body))
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            CatalogNode::Interior(category) => Some(category),
            CatalogNode::Leaf(_) => None,
        }
    }

    pub fn as_snippet(&self) -> Option<&Snippet> {
        match self {
            CatalogNode::Leaf(snippet) => Some(snippet),
            CatalogNode::Interior(_) => None,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, CatalogNode::Interior(_))
    }
}

impl<'de> Deserialize<'de> for CatalogNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = CatalogNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a snippet string or a category object")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Ok(CatalogNode::leaf(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
        Ok(CatalogNode::leaf(v))
    }

    // Map access yields keys in document order, which becomes position order.
    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut category = Category::new();
        while let Some((name, node)) = map.next_entry::<String, CatalogNode>()? {
            category.insert(name, node).map_err(de::Error::custom)?;
        }
        Ok(CatalogNode::Interior(category))
    }
}

/// The whole tree. The root is always a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    root: CatalogNode,
}

impl Catalog {
    pub fn new(root: Category) -> Self {
        Self {
            root: CatalogNode::Interior(root),
        }
    }

    /// The catalog shipped inside the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let node: CatalogNode = serde_json::from_str(json)?;
        Self::from_node(node)
    }

    /// Reads a catalog document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let node: CatalogNode =
            serde_json::from_str(&content).map_err(|source| CatalogError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_node(node)?;
        tracing::debug!(
            path = %path.display(),
            entries = catalog.categories().map_or(0, Category::len),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn from_node(node: CatalogNode) -> Result<Self> {
        match node {
            CatalogNode::Interior(root) => Ok(Self::new(root)),
            CatalogNode::Leaf(_) => Err(CatalogError::RootNotCategory.into()),
        }
    }

    pub fn root(&self) -> &CatalogNode {
        &self.root
    }

    /// The top-level category. Every constructor checks the root, so this is
    /// `Some` for any catalog built here.
    pub fn categories(&self) -> Option<&Category> {
        self.root.as_category()
    }
}
