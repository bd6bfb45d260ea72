//! Credential storage and API settings resolution.
//!
//! Credentials come from, in order of precedence:
//! 1. `SHELLY_API_KEY` in the environment.
//! 2. `~/.config/shelly/config.json`, written by `shelly --init`.
//!
//! API settings start from built-in defaults (OpenRouter endpoint, fixed
//! model) and accept `SHELLY_BASE_URL` / `SHELLY_MODEL` overrides.

use crate::error::ConfigError;

mod defaults;
mod env;
mod store;
mod types;

pub use env::{ENV_API_KEY, ENV_BASE_URL, ENV_MODEL};
pub use store::{config_path_under, default_config_path, ConfigStore};
pub use types::{ApiSettings, Config};

/// Load credentials, honoring the `SHELLY_API_KEY` override.
pub fn load_config(store: &ConfigStore) -> Result<Config, ConfigError> {
    load_config_with(store, |name| std::env::var(name).ok())
}

pub(crate) fn load_config_with<FEnv>(
    store: &ConfigStore,
    env_lookup: FEnv,
) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = env::api_key_override_with(&env_lookup) {
        tracing::debug!("using API key from {ENV_API_KEY}");
        return Ok(Config::new(api_key));
    }
    let config = store.load()?;
    tracing::debug!(path = %store.path().display(), "loaded config");
    Ok(config)
}

/// Resolve API settings from defaults and the process environment.
pub fn resolve_api_settings() -> ApiSettings {
    resolve_api_settings_with(|name| std::env::var(name).ok())
}

pub(crate) fn resolve_api_settings_with<FEnv>(env_lookup: FEnv) -> ApiSettings
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut settings = ApiSettings::default();
    env::apply_api_env_overrides(&mut settings, &env_lookup);
    settings
}
