use colored::Colorize;
use console::Term;
use snipz::clipboard::Clipboard;
use snipz::commands::{CmdMessage, MessageLevel, SelectedSnippet};
use snipz::menu::MenuLine;
use std::io::{self, Write};

const SNIPPET_RULE: &str = "═";
const ROUND_RULE: &str = "─";
const ROUND_RULE_WIDTH: usize = 60;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Same text as `MenuLine`'s `Display`, with the position highlighted and
/// category names in bold.
pub(super) fn write_menu<W, I>(out: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = MenuLine>,
{
    for line in lines {
        let position = format!("{})", line.path);
        if line.is_category {
            let name = format!("{}/", line.name);
            writeln!(out, "{}{} {}", line.indent(), position.yellow(), name.bold())?;
        } else {
            writeln!(out, "{}{} {}", line.indent(), position.yellow(), line.name)?;
        }
    }
    Ok(())
}

/// The snippet text between two rules, followed by a blank line.
pub(super) fn write_snippet<W: Write>(
    out: &mut W,
    snippet: &SelectedSnippet,
    rule_width: usize,
) -> io::Result<()> {
    let rule = SNIPPET_RULE.repeat(rule_width);
    writeln!(out)?;
    writeln!(out, "{}", rule.dimmed())?;
    writeln!(out, "{}", snippet.text)?;
    writeln!(out, "{}", rule.dimmed())?;
    writeln!(out)
}

pub(super) fn write_round_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", ROUND_RULE.repeat(ROUND_RULE_WIDTH).dimmed())?;
    writeln!(out)
}

/// Hint shown when no clipboard helper exists on this host.
pub(super) fn clipboard_missing_message() -> CmdMessage {
    let programs = Clipboard::supported_programs();
    if programs.is_empty() {
        CmdMessage::warning("(clipboard not supported on this platform)")
    } else {
        CmdMessage::warning(format!(
            "(clipboard unavailable: install {})",
            programs.join(" or ")
        ))
    }
}

/// The configured width, narrowed to the terminal when stdout is one.
pub(super) fn fit_rule_width(configured: usize) -> usize {
    match Term::stdout().size_checked() {
        Some((_rows, cols)) if cols > 0 => configured.min(usize::from(cols)),
        _ => configured,
    }
}
