//! Centralized, hardcoded UI settings for terminal output.
//!
//! This is the single place to tweak labels, colors, and spinner behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / labels
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const SELECTION_PROMPT: &str = "\nSelect a command (1-3): ";
pub const WAITING_LABEL: &str = "waiting for";

// ---------------------------------------------------------------------------
// Spinner
// ---------------------------------------------------------------------------

/// Carriage return plus erase-line, so each frame overwrites the last.
pub const SPINNER_CLEAR_LINE: &str = "\r\x1b[2K";
pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const SPINNER_TICK_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_DETAIL: Color = Color::DarkGrey;
pub const COLOR_SUCCESS: Color = Color::Green;

pub const COLOR_SPINNER_FRAME: Color = Color::Cyan;
pub const COLOR_SPINNER_TEXT: Color = Color::DarkGrey;
