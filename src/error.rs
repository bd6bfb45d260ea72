//! Unified error types for shelly.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or saving the credential file.
#[derive(Debug)]
pub enum ConfigError {
    /// The user's home directory could not be resolved.
    HomeDirUnavailable,
    /// No config file exists yet; `shelly --init` creates it.
    NotFound(PathBuf),
    /// The config file exists but could not be read.
    Unreadable(PathBuf, std::io::Error),
    /// The config file is not valid JSON for [`crate::config::Config`].
    Malformed(PathBuf, serde_json::Error),
    /// The config directory could not be created.
    DirCreateFailed(PathBuf, std::io::Error),
    /// The config file could not be written.
    WriteFailed(PathBuf, std::io::Error),
    /// The config could not be accepted, for example a blank API key.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeDirUnavailable => write!(f, "unable to resolve home directory"),
            Self::NotFound(path) => write!(f, "config file not found: {}", path.display()),
            Self::Unreadable(path, e) => {
                write!(f, "failed to read config file {}: {e}", path.display())
            }
            Self::Malformed(path, e) => {
                write!(f, "failed to parse config file {}: {e}", path.display())
            }
            Self::DirCreateFailed(path, e) => write!(
                f,
                "failed to create config directory {}: {e}",
                path.display()
            ),
            Self::WriteFailed(path, e) => {
                write!(f, "failed to write config file {}: {e}", path.display())
            }
            Self::Invalid(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable(_, e) | Self::DirCreateFailed(_, e) | Self::WriteFailed(_, e) => {
                Some(e)
            }
            Self::Malformed(_, e) => Some(e),
            Self::HomeDirUnavailable | Self::NotFound(_) | Self::Invalid(_) => None,
        }
    }
}

impl ConfigError {
    /// True for failures where re-running `shelly --init` is the remedy.
    pub fn needs_init(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Unreadable(..) | Self::Malformed(..)
        )
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the chat-completions HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be serialized or built.
    Build(String),
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the API.
    Status(u16, String),
    /// The response body was not a chat-completions payload.
    InvalidResponse(String),
    /// The response parsed but carried no choices.
    EmptyReply,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(msg) => write!(f, "failed to build request: {msg}"),
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "API error (status {code}): {body}"),
            Self::InvalidResponse(msg) => write!(f, "failed to parse response: {msg}"),
            Self::EmptyReply => write!(f, "no response from API"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            return Self::Build(e.to_string());
        }
        Self::Http(e)
    }
}

impl ApiError {
    /// HTTP status code for `Status` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code, _) => Some(*code),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SelectionError
// ---------------------------------------------------------------------------

/// Errors from the interactive command picker.
#[derive(Debug)]
pub enum SelectionError {
    /// The user typed something other than 1, 2, or 3.
    Invalid(String),
    /// The reply had no usable line for the chosen number.
    NotFound(u8),
    /// Reading the answer from the terminal failed.
    Io(std::io::Error),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(_) => write!(f, "Invalid selection. Please enter 1, 2, or 3."),
            Self::NotFound(_) => write!(f, "Could not find the selected command"),
            Self::Io(e) => write!(f, "failed to read selection: {e}"),
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<std::io::Error> for SelectionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ClipboardError
// ---------------------------------------------------------------------------

/// Errors from handing text to an external clipboard program.
#[derive(Debug)]
pub enum ClipboardError {
    /// None of the supported clipboard utilities is on `PATH`.
    Unavailable,
    /// The clipboard program could not be started.
    Spawn(String, std::io::Error),
    /// Writing to or waiting on the clipboard program failed.
    Io(String, std::io::Error),
    /// The clipboard program exited unsuccessfully.
    Failed(String, std::process::ExitStatus),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(
                f,
                "no clipboard utility found (install xclip, xsel, or wl-clipboard)"
            ),
            Self::Spawn(program, e) => write!(f, "failed to start {program}: {e}"),
            Self::Io(program, e) => write!(f, "{program}: {e}"),
            Self::Failed(program, status) => write!(f, "{program} exited with {status}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

// ---------------------------------------------------------------------------
// ShellyError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type; every failure ends the invocation with exit code 1.
#[derive(Debug)]
pub enum ShellyError {
    Config(ConfigError),
    Api(ApiError),
    Selection(SelectionError),
    Clipboard(ClipboardError),
    /// Terminal or stdin I/O outside the selection prompt.
    Io(std::io::Error),
}

impl fmt::Display for ShellyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Api(e) => write!(f, "{e}"),
            Self::Selection(e) => write!(f, "{e}"),
            Self::Clipboard(e) => write!(f, "copying to clipboard: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for ShellyError {}

impl From<ConfigError> for ShellyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ApiError> for ShellyError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<SelectionError> for ShellyError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}

impl From<ClipboardError> for ShellyError {
    fn from(e: ClipboardError) -> Self {
        Self::Clipboard(e)
    }
}

impl From<std::io::Error> for ShellyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
