//! Compile-time build metadata exposed through `shelly --version`.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("SHELLY_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("SHELLY_BUILD_TIMESTAMP");

/// Version block printed by `shelly --version` (clap prefixes the binary name).
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("SHELLY_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("SHELLY_BUILD_TIMESTAMP")
);

/// Help trailer block that surfaces build metadata in `shelly --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("SHELLY_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("SHELLY_BUILD_TIMESTAMP")
);

/// One-line build summary used in debug logs.
pub fn build_summary() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
