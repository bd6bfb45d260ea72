//! Terminal-facing UI: rendering contract, spinner, and terminal input.

pub mod render;
pub mod settings;
pub mod spinner;
pub mod terminal;
