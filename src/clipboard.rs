//! Clipboard hand-off through external utilities.
//!
//! Searches `PATH` for `xclip`, `xsel`, then `wl-copy`, and pipes the text into
//! the first one found.

use crate::error::ClipboardError;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Supported clipboard utilities, in search order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardTool {
    Xclip,
    Xsel,
    WlCopy,
}

impl ClipboardTool {
    /// Search order used by [`detect_in_path`].
    pub const PRIORITY: [Self; 3] = [Self::Xclip, Self::Xsel, Self::WlCopy];

    /// Executable name looked up on `PATH`.
    pub fn program(self) -> &'static str {
        match self {
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
        }
    }

    /// Arguments that make the tool read stdin into the clipboard selection.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Xclip => &["-selection", "clipboard"],
            Self::Xsel => &["--clipboard", "--input"],
            Self::WlCopy => &[],
        }
    }
}

/// Anything that can receive the selected command.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by whichever supported utility is on `PATH`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let path_var = std::env::var_os("PATH");
        let (tool, program) = detect_in_path(path_var.as_deref())?;
        tracing::debug!(tool = tool.program(), path = %program.display(), "copying to clipboard");
        pipe_to_program(&program, tool.args(), text)
    }
}

/// Find the first supported clipboard utility in a `PATH`-style value.
pub fn detect_in_path(
    path_var: Option<&OsStr>,
) -> Result<(ClipboardTool, PathBuf), ClipboardError> {
    let path_var = path_var.ok_or(ClipboardError::Unavailable)?;
    ClipboardTool::PRIORITY
        .into_iter()
        .find_map(|tool| find_executable(tool.program(), path_var).map(|path| (tool, path)))
        .ok_or(ClipboardError::Unavailable)
}

fn find_executable(program: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Run `program args...`, write `text` to its stdin, and wait for it to exit.
fn pipe_to_program(program: &Path, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let name = program.display().to_string();
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|err| ClipboardError::Spawn(name.clone(), err))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|err| ClipboardError::Io(name.clone(), err))?;
        // Dropping stdin closes the pipe so the tool sees end-of-input.
    }

    let status = child
        .wait()
        .map_err(|err| ClipboardError::Io(name.clone(), err))?;
    if !status.success() {
        return Err(ClipboardError::Failed(name, status));
    }
    Ok(())
}
