//! # Interactive Session
//!
//! The browse loop: print the menu, read a dotted path, print the snippet, offer
//! to copy it, ask whether to go again. A path that does not resolve is
//! reported as "Invalid selection." and the menu comes back. A path that lands
//! on a category gets a hint instead.
//!
//! The loop ends on a quit token (`q`, `quit`, `exit`, or an empty line), on a
//! "no" to "Another?", or when input runs out.

use super::print::{
    clipboard_missing_message, write_menu, write_messages, write_round_separator, write_snippet,
};
use colored::Colorize;
use snipz::api::SnipzApi;
use snipz::clipboard::ClipboardProvider;
use snipz::commands::CmdMessage;
use snipz::error::{Result, SnipzError};
use std::io::{BufRead, Write};

pub(super) const BANNER: &str = "Snippet Browser  (q = quit)";
const SELECT_PROMPT: &str = "→ ";
const COPY_PROMPT: &str = "Copy to clipboard? [Y/n] ";
const ANOTHER_PROMPT: &str = "Another? [Y/n] ";
const QUIT_TOKENS: &[&str] = &["", "q", "quit", "exit"];

fn is_quit(choice: &str) -> bool {
    QUIT_TOKENS.contains(&choice.to_lowercase().as_str())
}

fn is_no(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "n" | "no")
}

pub(super) struct Session<'a, R, W> {
    api: &'a SnipzApi,
    clipboard: Option<&'a dyn ClipboardProvider>,
    input: R,
    output: W,
    rule_width: usize,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(super) fn new(
        api: &'a SnipzApi,
        clipboard: Option<&'a dyn ClipboardProvider>,
        input: R,
        output: W,
        rule_width: usize,
    ) -> Self {
        Self {
            api,
            clipboard,
            input,
            output,
            rule_width,
        }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER.bold())?;
        writeln!(self.output)?;

        loop {
            write_menu(&mut self.output, self.api.menu())?;
            writeln!(self.output)?;

            let Some(choice) = self.prompt(SELECT_PROMPT)? else {
                break;
            };
            if is_quit(&choice) {
                break;
            }

            let snippet = match self.api.show(&choice) {
                Ok(result) => match result.snippet {
                    Some(snippet) => snippet,
                    None => continue,
                },
                Err(SnipzError::Resolution(_)) => {
                    writeln!(self.output, "{}", "Invalid selection.".red())?;
                    writeln!(self.output)?;
                    continue;
                }
                Err(SnipzError::NotASnippet(path)) => {
                    let hint = format!("{} is a category; pick a snippet inside it.", path);
                    writeln!(self.output, "{}", hint.yellow())?;
                    writeln!(self.output)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            write_snippet(&mut self.output, &snippet, self.rule_width)?;

            let Some(answer) = self.prompt(COPY_PROMPT)? else {
                break;
            };
            if !is_no(&answer) {
                self.copy(&snippet.text)?;
            }

            let Some(answer) = self.prompt(ANOTHER_PROMPT)? else {
                break;
            };
            if is_no(&answer) {
                break;
            }
            write_round_separator(&mut self.output)?;
        }

        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Clipboard trouble is reported and the session goes on.
    fn copy(&mut self, text: &str) -> Result<()> {
        let message = match self.clipboard {
            Some(clipboard) => match clipboard.copy(text) {
                Ok(()) => CmdMessage::success("(copied)"),
                Err(e) => {
                    tracing::debug!(clipboard = clipboard.name(), error = %e, "copy failed");
                    CmdMessage::warning(format!("({})", e))
                }
            },
            None => clipboard_missing_message(),
        };
        write_messages(&mut self.output, &[message])?;
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipz::catalog::Catalog;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct FakeClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl ClipboardProvider for FakeClipboard {
        fn name(&self) -> &str {
            "fake"
        }

        fn copy(&self, text: &str) -> Result<()> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardProvider for BrokenClipboard {
        fn name(&self) -> &str {
            "broken"
        }

        fn copy(&self, _text: &str) -> Result<()> {
            Err(SnipzError::ClipboardUnavailable("no display".into()))
        }
    }

    fn api() -> SnipzApi {
        SnipzApi::new(
            Catalog::from_json_str(r#"{"A": {"x1": "  hello  ", "x2": "world"}, "B": {}}"#)
                .unwrap(),
        )
    }

    fn run_session(input: &str, clipboard: Option<&dyn ClipboardProvider>) -> String {
        colored::control::set_override(false);
        let api = api();
        let mut output = Vec::new();
        Session::new(&api, clipboard, Cursor::new(input), &mut output, 10)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit_tokens() {
        for token in ["q", "Q", "quit", "EXIT", "", "   "] {
            let output = run_session(&format!("{}\n", token), None);
            assert!(output.starts_with(BANNER));
            assert!(output.contains("1) A/\n  1.1) x1\n  1.2) x2\n2) B/\n"));
            assert!(!output.contains("Invalid selection."));
        }
    }

    #[test]
    fn test_select_copy_and_stop() {
        let clipboard = FakeClipboard::default();
        let output = run_session("1.1\ny\nn\n", Some(&clipboard));
        assert!(output.contains("══════════\nhello\n══════════\n"));
        assert!(output.contains("(copied)"));
        assert_eq!(*clipboard.copied.borrow(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_enter_means_yes_to_copy() {
        let clipboard = FakeClipboard::default();
        run_session("A.x2\n\nno\n", Some(&clipboard));
        assert_eq!(*clipboard.copied.borrow(), vec!["world".to_string()]);
    }

    #[test]
    fn test_decline_copy() {
        let clipboard = FakeClipboard::default();
        let output = run_session("1.1\nN\nn\n", Some(&clipboard));
        assert!(clipboard.copied.borrow().is_empty());
        assert!(!output.contains("(copied)"));
    }

    #[test]
    fn test_invalid_selection_reprompts() {
        let output = run_session("9\n1.1.1\nzzz\nq\n", None);
        assert_eq!(output.matches("Invalid selection.").count(), 3);
        // Menu once per prompt.
        assert_eq!(output.matches("1) A/").count(), 4);
    }

    #[test]
    fn test_category_selection_is_rejected() {
        let output = run_session("1\nq\n", None);
        assert!(output.contains("1 is a category; pick a snippet inside it."));
        assert!(!output.contains("═"));
    }

    #[test]
    fn test_another_round() {
        let clipboard = FakeClipboard::default();
        let output = run_session("1.1\nn\ny\n1.2\nn\nn\n", Some(&clipboard));
        assert!(output.contains("hello"));
        assert!(output.contains("world"));
        assert!(output.contains(&"─".repeat(60)));
        assert!(clipboard.copied.borrow().is_empty());
    }

    #[test]
    fn test_missing_clipboard_is_soft() {
        let output = run_session("1.1\ny\ny\nq\n", None);
        assert!(output.contains("(clipboard"));
        assert!(output.matches("1) A/").count() >= 2);
    }

    #[test]
    fn test_failing_clipboard_is_soft() {
        let output = run_session("1.1\ny\nn\n", Some(&BrokenClipboard));
        assert!(output.contains("(Clipboard unavailable: no display)"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let output = run_session("", None);
        assert!(output.ends_with(&format!("{}\n", SELECT_PROMPT)));

        let output = run_session("1.1\n", None);
        assert!(output.contains("hello"));
        assert!(output.ends_with(&format!("{}\n", COPY_PROMPT)));
    }
}
