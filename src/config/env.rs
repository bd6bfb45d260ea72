//! Environment overrides for credentials and API settings.
//!
//! Every lookup goes through an injected closure so tests never touch the
//! real process environment.

use super::ApiSettings;

/// Replaces the stored API key; the config file is not read when set.
pub const ENV_API_KEY: &str = "SHELLY_API_KEY";
/// Replaces the API base URL.
pub const ENV_BASE_URL: &str = "SHELLY_BASE_URL";
/// Replaces the model identifier.
pub const ENV_MODEL: &str = "SHELLY_MODEL";

/// Read one env var, ignoring unset, empty, and whitespace-only values.
pub(super) fn env_value<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Return the runtime API key override, if any.
pub(super) fn api_key_override_with<FEnv>(env_lookup: &FEnv) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_value(env_lookup, ENV_API_KEY)
}

/// Apply base-URL and model overrides on top of `settings`.
pub(super) fn apply_api_env_overrides<FEnv>(settings: &mut ApiSettings, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = env_value(env_lookup, ENV_BASE_URL) {
        settings.base_url = url;
    }
    if let Some(model) = env_value(env_lookup, ENV_MODEL) {
        settings.model = model;
    }
}
