use crate::error::{Result, SnipzError};
use std::env;
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Something that can receive copied text.
pub trait ClipboardProvider {
    fn name(&self) -> &str;
    fn copy(&self, text: &str) -> Result<()>;
}

/// A clipboard helper program and the arguments that make it read stdin.
type Backend = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const BACKENDS: &[Backend] = &[("pbcopy", &[])];

// Wayland first; xclip and xsel only work under X11.
#[cfg(target_os = "linux")]
const BACKENDS: &[Backend] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const BACKENDS: &[Backend] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const BACKENDS: &[Backend] = &[];

/// The system clipboard, reached through an OS helper program.
/// - macOS: pbcopy
/// - Linux: wl-copy, xclip or xsel
/// - Windows: clip.exe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    program: &'static str,
    args: &'static [&'static str],
}

impl Clipboard {
    /// Looks for a supported helper on `PATH`. `None` means copying is not
    /// possible on this host.
    pub fn detect() -> Option<Self> {
        let found = env::var_os("PATH").and_then(|paths| Self::find_in(&paths));

        match &found {
            Some(clipboard) => tracing::debug!(program = clipboard.program, "clipboard detected"),
            None => tracing::debug!("no clipboard helper found on PATH"),
        }
        found
    }

    /// The first supported helper that can run from one of the `PATH`-style
    /// directories in `paths`.
    fn find_in(paths: &OsStr) -> Option<Self> {
        BACKENDS
            .iter()
            .find(|(program, _)| env::split_paths(paths).any(|dir| is_executable(&dir, program)))
            .map(|&(program, args)| Clipboard { program, args })
    }

    /// Helpers this platform knows about, for hints when none is installed.
    pub fn supported_programs() -> Vec<&'static str> {
        BACKENDS.iter().map(|(program, _)| *program).collect()
    }
}

impl ClipboardProvider for Clipboard {
    fn name(&self) -> &str {
        self.program
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                SnipzError::ClipboardUnavailable(format!("failed to spawn {}: {}", self.program, e))
            })?;

        // Stdin is dropped at the end of this block so the helper sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(SnipzError::ClipboardUnavailable(format!(
                    "failed to write to {}: {}",
                    self.program, e
                )));
            }
        }

        let status = child.wait().map_err(|e| {
            SnipzError::ClipboardUnavailable(format!("failed to wait for {}: {}", self.program, e))
        })?;

        if status.success() {
            tracing::debug!(program = self.program, bytes = text.len(), "copied to clipboard");
            Ok(())
        } else {
            Err(SnipzError::ClipboardUnavailable(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

fn is_executable(dir: &Path, program: &str) -> bool {
    if can_run(&dir.join(program)) {
        return true;
    }
    cfg!(windows) && can_run(&dir.join(format!("{}.exe", program)))
}

#[cfg(unix)]
fn can_run(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn can_run(path: &Path) -> bool {
    path.is_file()
}
