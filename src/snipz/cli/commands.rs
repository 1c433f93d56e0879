use super::print::{
    clipboard_missing_message, fit_rule_width, write_menu, write_messages, write_snippet,
};
use super::session::Session;
use super::setup::{Cli, Commands};
use clap::Parser;
use snipz::api::{configure, ConfigAction, SnipzApi};
use snipz::catalog::Catalog;
use snipz::clipboard::{Clipboard, ClipboardProvider};
use snipz::commands::{CmdMessage, SelectedSnippet};
use snipz::config::{self, SnipzConfig, KEYS};
use snipz::error::{Result, SnipzError};
use snipz::logging;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

struct AppContext {
    api: SnipzApi,
    rule_width: usize,
}

pub fn run() -> Result<()> {
    let Cli {
        command,
        catalog,
        verbose,
    } = Cli::parse();
    logging::init(verbose);

    let config_dir = config::config_dir()?;

    match command.unwrap_or(Commands::Browse) {
        Commands::Config { key, value } => handle_config(&config_dir, key, value),
        Commands::Browse => handle_browse(&init_context(catalog, &config_dir)?),
        Commands::List => handle_list(&init_context(catalog, &config_dir)?),
        Commands::Show { path, copy } => {
            handle_show(&init_context(catalog, &config_dir)?, &path, copy)
        }
        Commands::Copy { path } => handle_copy(&init_context(catalog, &config_dir)?, &path),
    }
}

fn init_context(catalog_override: Option<PathBuf>, config_dir: &Path) -> Result<AppContext> {
    let config = SnipzConfig::load(config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        SnipzConfig::default()
    });

    // Relative paths in the config file are relative to the config directory.
    let catalog_path = catalog_override.or_else(|| config.catalog.map(|p| config_dir.join(p)));
    let catalog = match catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    Ok(AppContext {
        api: SnipzApi::new(catalog),
        rule_width: config.rule_width,
    })
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nBye.");
        std::process::exit(0);
    }) {
        tracing::debug!(error = %e, "could not install interrupt handler");
    }

    let clipboard = Clipboard::detect();
    // Stdout stays unlocked so the interrupt handler can still print.
    let mut session = Session::new(
        &ctx.api,
        clipboard.as_ref().map(|c| c as &dyn ClipboardProvider),
        io::stdin().lock(),
        io::stdout(),
        fit_rule_width(ctx.rule_width),
    );
    session.run()
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    let mut out = io::stdout().lock();
    write_menu(&mut out, result.menu)?;
    write_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_show(ctx: &AppContext, path: &str, copy: bool) -> Result<()> {
    let snippet = select(ctx, path)?;
    let mut out = io::stdout().lock();
    write_snippet(&mut out, &snippet, fit_rule_width(ctx.rule_width))?;

    if copy {
        let message = match Clipboard::detect() {
            Some(clipboard) => match clipboard.copy(&snippet.text) {
                Ok(()) => CmdMessage::success("(copied)"),
                Err(e) => CmdMessage::warning(format!("({})", e)),
            },
            None => clipboard_missing_message(),
        };
        write_messages(&mut out, &[message])?;
    }
    Ok(())
}

fn handle_copy(ctx: &AppContext, path: &str) -> Result<()> {
    let snippet = select(ctx, path)?;
    let clipboard = Clipboard::detect().ok_or_else(|| {
        SnipzError::ClipboardUnavailable(format!(
            "no clipboard helper found (looked for: {})",
            Clipboard::supported_programs().join(", ")
        ))
    })?;
    clipboard.copy(&snippet.text)?;

    let message = CmdMessage::success(format!("Copied {} ({}).", snippet.name, snippet.path));
    write_messages(&mut io::stdout().lock(), &[message])?;
    Ok(())
}

fn select(ctx: &AppContext, path: &str) -> Result<SelectedSnippet> {
    ctx.api
        .show(path.trim())?
        .snippet
        .ok_or_else(|| SnipzError::NotASnippet(path.to_string()))
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = configure(config_dir, action)?;
    let mut out = io::stdout().lock();
    if let (true, Some(config)) = (show_all, &result.config) {
        for key in KEYS {
            if let Some(value) = config.get(key) {
                writeln!(out, "{} = {}", key, value)?;
            }
        }
    }
    write_messages(&mut out, &result.messages)?;
    Ok(())
}
