//! Terminal input primitives.
//!
//! Piped context and the interactive selection come from different devices:
//! when stdin is a pipe it carries context, and the selection answer is read
//! from the controlling terminal so the pipe cannot answer the prompt.

use std::io::{self, BufRead, BufReader, IsTerminal, Read, Write};

/// Controlling-terminal device opened for the selection prompt.
#[cfg(unix)]
const CONTROLLING_TTY: &str = "/dev/tty";

/// Input side of the terminal, injectable for tests.
pub trait Terminal {
    /// True when stdin is an interactive terminal rather than a pipe or file.
    fn stdin_is_interactive(&self) -> bool;
    /// Read all of stdin until end-of-input as newline-joined lines.
    fn read_piped_input(&mut self) -> io::Result<String>;
    /// Read one line from the controlling terminal, falling back to stdin.
    fn read_selection_line(&mut self) -> io::Result<String>;
    /// Read the API key during `--init`, without echo on a terminal.
    fn read_api_key(&mut self) -> io::Result<String>;
}

/// Process terminal backed by stdin and the controlling tty.
#[derive(Debug, Default)]
pub struct SystemTerminal;

impl Terminal for SystemTerminal {
    fn stdin_is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_piped_input(&mut self) -> io::Result<String> {
        read_lines_joined(io::stdin().lock())
    }

    fn read_selection_line(&mut self) -> io::Result<String> {
        match open_controlling_tty() {
            Some(tty) => read_one_line(BufReader::new(tty)),
            None => {
                tracing::debug!("controlling terminal unavailable; reading selection from stdin");
                read_one_line(io::stdin().lock())
            }
        }
    }

    fn read_api_key(&mut self) -> io::Result<String> {
        if self.stdin_is_interactive() {
            let key = rpassword::read_password()?;
            // Echo is off, so the user's Enter never reached the screen.
            let _ = writeln!(io::stdout());
            return Ok(key);
        }
        read_one_line(io::stdin().lock())
    }
}

#[cfg(unix)]
fn open_controlling_tty() -> Option<std::fs::File> {
    std::fs::File::open(CONTROLLING_TTY).ok()
}

#[cfg(not(unix))]
fn open_controlling_tty() -> Option<std::fs::File> {
    None
}

/// Read until end-of-input and join the lines with `\n`.
///
/// Line terminators (`\n` or `\r\n`) are dropped and no trailing newline is
/// kept. Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines_joined<R: Read>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().collect::<Vec<_>>().join("\n"))
}

/// Read a single line, returning it with its terminator; empty at EOF.
///
/// Bytes that are not UTF-8 are replaced, so a garbled answer reaches
/// validation as text instead of failing as an I/O error.
pub fn read_one_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}
