use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz", bin_name = "snipz", version)]
#[command(about = "Browse numbered code snippets and copy them to the clipboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog document to browse instead of the configured one
    #[arg(short, long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Browse the menu interactively (default)
    #[command(alias = "b", display_order = 1)]
    Browse,

    /// Print the numbered menu
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Print one snippet
    #[command(alias = "s", display_order = 3)]
    Show {
        /// Dotted path of the snippet (e.g. 2.1 or "Flask – Basic Setup.1")
        path: String,

        /// Also copy the snippet to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Copy one snippet to the clipboard without printing it
    #[command(alias = "c", display_order = 4)]
    Copy {
        /// Dotted path of the snippet (e.g. 2.1)
        path: String,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (catalog, rule-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
