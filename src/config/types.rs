//! Configuration data model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::defaults::{DEFAULT_API_BASE_URL, DEFAULT_MODEL_ID};

/// Persisted credentials (`~/.config/shelly/config.json`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

// Keep the key out of debug output and logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Resolved API connection settings used by the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL; `/chat/completions` is appended per request.
    pub base_url: String,
    pub model: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL_ID.to_string(),
        }
    }
}
