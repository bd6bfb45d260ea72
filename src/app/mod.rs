//! Binary-local application orchestration.
//!
//! `main.rs` only sets up logging and parses arguments; this module turns the
//! parsed invocation into real terminal, clipboard, and HTTP seams and maps
//! the outcome to an exit code.

pub(crate) mod entry;
