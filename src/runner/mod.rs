//! Invocation flows shared by the binary: one model round-trip per mode, and
//! the `--init` credential setup.
//!
//! Both flows take their side effects through injected seams
//! ([`RenderSink`], [`Terminal`], [`Clipboard`], [`ModelClient`]) so they run
//! unchanged against the real terminal or test doubles.
//!
//! [`RenderSink`]: crate::ui::render::RenderSink
//! [`Terminal`]: crate::ui::terminal::Terminal
//! [`Clipboard`]: crate::clipboard::Clipboard
//! [`ModelClient`]: crate::api::ModelClient

mod init;
mod mode;

pub use init::run_init;
pub use mode::{run_mode, ModeContext};
