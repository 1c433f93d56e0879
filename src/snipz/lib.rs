//! # Snipz Architecture
//!
//! Snipz is a **snippet browser library** with a terminal client on top. The library
//! knows how to hold a catalog of snippets, number it, and find things in it; the
//! binary knows how to talk to a person.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive session           │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalog, normalizes selections to DottedPaths   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, show, config                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog.rs, menu.rs, path.rs)                        │
//! │  - Immutable tree, lazy menu renderer, dotted-path resolver │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Position Numbers
//!
//! Every child in the catalog is addressed by its 1-based position inside its
//! parent. The menu prints those positions as dotted paths (`2.1`), and the
//! resolver accepts exactly the same text, or literal names, or a mix.
//! See [`menu`] and [`path`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns plain Rust values, never writes
//! to stdout/stderr, and never calls `std::process::exit`. Diagnostics go
//! through `tracing` and stay silent unless the binary installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: Catalog tree and JSON catalog documents
//! - [`menu`]: Numbered menu rendering
//! - [`path`]: Dotted path parsing and resolution
//! - [`config`]: Configuration management
//! - [`clipboard`]: Clipboard detection and copy
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod path;
