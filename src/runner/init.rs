//! `shelly --init`: ask for the OpenRouter key and store it.

use crate::config::{Config, ConfigStore};
use crate::error::{ConfigError, ShellyError};
use crate::ui::render::RenderSink;
use crate::ui::terminal::Terminal;

const KEY_PROMPT: &str = "Enter your OpenRouter API key: ";

/// Prompt for an API key and write it to `store`.
///
/// A blank answer is rejected before anything touches the filesystem.
pub fn run_init(
    renderer: &dyn RenderSink,
    terminal: &mut dyn Terminal,
    store: &ConfigStore,
) -> Result<(), ShellyError> {
    renderer.info("Initializing Shelly...");
    renderer.prompt_inline(KEY_PROMPT);

    let answer = terminal.read_api_key()?;
    let key = answer.trim();
    if key.is_empty() {
        return Err(ConfigError::Invalid("API key cannot be empty".to_string()).into());
    }

    store.save(&Config::new(key))?;
    tracing::info!(path = %store.path().display(), "saved credentials");

    renderer.info(&format!("Configuration saved to {}", store.path().display()));
    renderer.info("Shelly is ready to use!");
    Ok(())
}
