//! # CLI Layer
//!
//! One possible client for snipz. This is the only code that:
//! - Parses arguments (`setup.rs`)
//! - Reads stdin and writes stdout/stderr (`print.rs`, `session.rs`)
//! - Decides exit codes (`main.rs`, via [`run`])
//!
//! `commands.rs` wires parsed arguments to the API and picks how each result is
//! printed. `session.rs` is the interactive browse loop; it is generic over its
//! reader and writer so tests can script a whole session.

mod commands;
mod print;
mod session;
mod setup;

pub use commands::run;
