//! Stderr spinner shown while the model request is in flight.
//!
//! The spinner runs on its own thread and is stopped by dropping the sending
//! half of a channel, so stopping never waits out a full tick.

use crate::ui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Running (or inactive) spinner; stops and clears its line on drop.
pub struct Spinner {
    stop: Option<mpsc::Sender<()>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Spinner {
    /// A spinner that draws nothing.
    pub fn inactive() -> Self {
        Self {
            stop: None,
            worker: None,
        }
    }

    /// Show "waiting for <model>" on stderr, unless stderr is not a terminal.
    pub fn start(model: &str, color: bool) -> Self {
        if !io::stderr().is_terminal() {
            return Self::inactive();
        }
        Self::spawn(model.to_string(), color)
    }

    fn spawn(model: String, color: bool) -> Self {
        let (stop, stopped) = mpsc::channel::<()>();
        let worker = thread::spawn(move || {
            let started = Instant::now();
            let tick = Duration::from_millis(settings::SPINNER_TICK_MS);
            let mut frame = 0usize;
            loop {
                let line = spinner_line(frame, &model, started.elapsed(), color);
                draw(&mut io::stderr().lock(), &line);
                match stopped.recv_timeout(tick) {
                    Err(RecvTimeoutError::Timeout) => frame += 1,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            draw(&mut io::stderr().lock(), "");
        });
        Self {
            stop: Some(stop),
            worker: Some(worker),
        }
    }

    pub fn is_active(&self) -> bool {
        self.worker.is_some()
    }

    /// Stop drawing and erase the spinner line.
    pub fn stop(&mut self) {
        self.stop.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Overwrite the current terminal line with `text`.
fn draw<W: Write>(out: &mut W, text: &str) {
    let _ = write!(out, "{}{text}", settings::SPINNER_CLEAR_LINE);
    let _ = out.flush();
}

/// One frame: `[|] waiting for <model> 1.2s`.
fn spinner_line(frame: usize, model: &str, elapsed: Duration, color: bool) -> String {
    let glyph = settings::SPINNER_FRAMES[frame % settings::SPINNER_FRAMES.len()];
    let text = format!(
        "{} {model} {:.1}s",
        settings::WAITING_LABEL,
        elapsed.as_secs_f64()
    );
    if color {
        format!(
            "{} {}",
            format!("[{glyph}]").with(settings::COLOR_SPINNER_FRAME),
            text.with(settings::COLOR_SPINNER_TEXT)
        )
    } else {
        format!("[{glyph}] {text}")
    }
}
