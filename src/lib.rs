//! Shelly: a terminal assistant backed by an OpenRouter chat model.
//!
//! Three one-shot modes share a single request path:
//!
//! - debug: explain a failing command (piped on stdin) and suggest three fixes,
//! - command: suggest three commands for a task,
//! - question: answer a question, optionally grounded in piped text.
//!
//! Debug and command replies end with an interactive pick that copies the
//! chosen command to the system clipboard.
//!
//! ```no_run
//! use shelly::api::{ApiClient, ModelClient};
//! use shelly::config::{load_config, resolve_api_settings, ConfigStore};
//! use shelly::prompt::command_prompt;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigStore::default_location()?;
//! let config = load_config(&store)?;
//! let client = ApiClient::new(&resolve_api_settings(), &config);
//! let reply = client.complete(&command_prompt("list open ports")).await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod prompt;
pub mod runner;
pub mod selection;
#[cfg(test)]
pub mod testsupport;
pub mod types;
pub mod ui;
