use std::path::PathBuf;
use thiserror::Error;

/// Why a dotted path could not be walked to a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The path has more segments than the tree has depth at that branch.
    #[error("segment {segment} descends past a snippet")]
    NotContainer { segment: usize },

    #[error("position {index} is out of range (1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no entry named \"{name}\"")]
    NameNotFound { name: String },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate entry name: {0}")]
    DuplicateName(String),

    #[error("catalog root must be a category (a JSON object)")]
    RootNotCategory,

    #[error("failed to read catalog {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed catalog {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Invalid selection: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("{0} is a category; pick a snippet inside it")]
    NotASnippet(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
