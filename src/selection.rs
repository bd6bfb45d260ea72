//! Interactive pick of one numbered command from the model's reply.
//!
//! The flow is linear: prompt, read one answer, validate it, find the
//! matching `N.` line, copy it. Any failure ends the flow without re-prompting.

use crate::clipboard::Clipboard;
use crate::error::{SelectionError, ShellyError};
use crate::ui::render::RenderSink;
use crate::ui::settings;
use crate::ui::terminal::Terminal;

/// A validated choice in `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection(u8);

impl Selection {
    /// Accept exactly `1`, `2`, or `3` after trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        match input.trim() {
            "1" => Ok(Self(1)),
            "2" => Ok(Self(2)),
            "3" => Ok(Self(3)),
            other => Err(SelectionError::Invalid(other.to_string())),
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

/// Extract the command on the first line whose trimmed text starts with `N.`.
///
/// The prefix, surrounding whitespace, and enclosing backticks are stripped.
/// Only the first matching line counts; if it is empty after stripping, the
/// selection is reported as not found.
pub fn find_selected_command(reply: &str, selection: Selection) -> Result<String, SelectionError> {
    let prefix = format!("{}.", selection.number());
    let command = reply
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .map(|rest| rest.trim().trim_matches('`'))
        .filter(|command| !command.is_empty())
        .ok_or(SelectionError::NotFound(selection.number()))?;
    Ok(command.to_string())
}

/// Prompt for a number and return the matching command from `reply`.
pub fn choose_command(
    renderer: &dyn RenderSink,
    terminal: &mut dyn Terminal,
    reply: &str,
) -> Result<String, SelectionError> {
    renderer.prompt_inline(settings::SELECTION_PROMPT);
    let answer = terminal.read_selection_line()?;
    let selection = Selection::parse(&answer)?;
    tracing::debug!(selection = selection.number(), "selection accepted");
    find_selected_command(reply, selection)
}

/// Full selection flow: choose a command, copy it, confirm.
///
/// Returns the copied command.
pub fn select_and_copy(
    renderer: &dyn RenderSink,
    terminal: &mut dyn Terminal,
    clipboard: &dyn Clipboard,
    reply: &str,
) -> Result<String, ShellyError> {
    let command = choose_command(renderer, terminal, reply)?;
    clipboard.copy(&command)?;
    renderer.success(&format!("Command copied to clipboard: {command}"));
    Ok(command)
}
