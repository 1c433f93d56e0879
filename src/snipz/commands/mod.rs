use crate::config::SnipzConfig;
use crate::menu::MenuLine;

pub mod config;
pub mod list;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A snippet picked by path, ready to print or copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSnippet {
    /// The path as the user typed it.
    pub path: String,
    pub name: String,
    /// Payload with surrounding whitespace removed.
    pub text: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub menu: Vec<MenuLine>,
    pub snippet: Option<SelectedSnippet>,
    pub config: Option<SnipzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_menu(mut self, menu: Vec<MenuLine>) -> Self {
        self.menu = menu;
        self
    }

    pub fn with_snippet(mut self, snippet: SelectedSnippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn with_config(mut self, config: SnipzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
