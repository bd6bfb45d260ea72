//! Default configuration constants.
//!
//! Keeping defaults in one module lets tests and the runtime share the same
//! values without duplicating literals.

/// Directory under `~/.config` that holds shelly's files.
pub(super) const APP_DIR_NAME: &str = "shelly";
/// Credential file name inside [`APP_DIR_NAME`].
pub(super) const CONFIG_FILE_NAME: &str = "config.json";
/// Default OpenAI-compatible API base URL (OpenRouter).
pub(super) const DEFAULT_API_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Default provider model ID.
pub(super) const DEFAULT_MODEL_ID: &str = "deepseek/deepseek-chat-v3.1:free";
