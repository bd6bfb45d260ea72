//! Rendering contract and default terminal renderer.
//!
//! Reply text and the selection prompt go to stdout so they can be piped.
//! Diagnostics (`warning:`, `error:`, hints, spinner) go to stderr.
//!
//! Output is best effort: a reader that has gone away (`shelly ... | head -1`)
//! silently truncates what is printed instead of aborting the process.

use crate::ui::settings;
use crate::ui::spinner::Spinner;
use crossterm::style::{Color, Stylize};
use std::io::{self, IsTerminal, Write};

/// Injectable rendering interface used by orchestration code.
///
/// `Renderer` is the terminal implementation; tests substitute a recording
/// sink without touching the process streams.
pub trait RenderSink: Send + Sync {
    /// Print the model's reply on stdout.
    fn assistant_message(&self, content: &str);
    /// Print an informational line on stdout.
    fn info(&self, text: &str);
    /// Print a success confirmation on stdout.
    fn success(&self, text: &str);
    /// Print prompt text on stdout without a newline and flush.
    fn prompt_inline(&self, text: &str);
    /// Start the waiting spinner for a request to `model`.
    fn waiting(&self, model: &str) -> Spinner;
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Render an indented hint under a warning or error.
    fn detail(&self, text: &str);
}

/// Terminal renderer. Color is decided per stream, so redirecting stdout to a
/// file never captures escape codes even while stderr stays colored.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    stdout_color: bool,
    stderr_color: bool,
}

impl Renderer {
    pub fn new(stdout_color: bool, stderr_color: bool) -> Self {
        Self {
            stdout_color,
            stderr_color,
        }
    }

    /// Color each stream only when it is a terminal and `--no-color` is unset.
    pub fn detect(no_color: bool) -> Self {
        Self::new(
            !no_color && io::stdout().is_terminal(),
            !no_color && io::stderr().is_terminal(),
        )
    }

    fn success_text(&self, text: &str) -> String {
        paint(text, settings::COLOR_SUCCESS, self.stdout_color, false)
    }

    fn labeled(&self, label: &str, color: Color, msg: &str) -> String {
        format!("{} {msg}", paint(label, color, self.stderr_color, true))
    }

    fn detail_text(&self, text: &str) -> String {
        format!(
            "{}{}",
            settings::INDENT_1,
            paint(text, settings::COLOR_DETAIL, self.stderr_color, false)
        )
    }
}

impl RenderSink for Renderer {
    fn assistant_message(&self, content: &str) {
        let _ = write_line(&mut io::stdout().lock(), content);
    }

    fn info(&self, text: &str) {
        let _ = write_line(&mut io::stdout().lock(), text);
    }

    fn success(&self, text: &str) {
        let _ = write_line(&mut io::stdout().lock(), &self.success_text(text));
    }

    fn prompt_inline(&self, text: &str) {
        let _ = write_inline(&mut io::stdout().lock(), text);
    }

    fn waiting(&self, model: &str) -> Spinner {
        Spinner::start(model, self.stderr_color)
    }

    fn warn(&self, msg: &str) {
        let line = self.labeled(settings::LABEL_WARNING, settings::COLOR_WARNING, msg);
        let _ = write_line(&mut io::stderr().lock(), &line);
    }

    fn error(&self, msg: &str) {
        let line = self.labeled(settings::LABEL_ERROR, settings::COLOR_ERROR, msg);
        let _ = write_line(&mut io::stderr().lock(), &line);
    }

    fn detail(&self, text: &str) {
        let _ = write_line(&mut io::stderr().lock(), &self.detail_text(text));
    }
}

fn paint(text: &str, color: Color, enabled: bool, bold: bool) -> String {
    match (enabled, bold) {
        (false, _) => text.to_string(),
        (true, false) => text.with(color).to_string(),
        (true, true) => text.with(color).bold().to_string(),
    }
}

/// Write `text` plus a newline and flush.
fn write_line<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")?;
    out.flush()
}

/// Write `text` without a newline and flush, for prompts.
fn write_inline<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}
