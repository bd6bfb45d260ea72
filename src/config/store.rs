//! On-disk credential store.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{APP_DIR_NAME, CONFIG_FILE_NAME};
use super::Config;

/// Handle to the JSON credential file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/shelly/config.json`.
    pub fn default_location() -> Result<Self, ConfigError> {
        default_config_path()
            .map(Self::at)
            .ok_or(ConfigError::HomeDirUnavailable)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the credential file.
    ///
    /// A missing file is reported as [`ConfigError::NotFound`], separately
    /// from read failures and JSON errors.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(self.path.clone()));
            }
            Err(err) => return Err(ConfigError::Unreadable(self.path.clone(), err)),
        };
        serde_json::from_str(&text).map_err(|err| ConfigError::Malformed(self.path.clone(), err))
    }

    /// Persist credentials with owner-only permissions (dir 0700, file 0600).
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid("API key cannot be empty".to_string()));
        }

        if let Some(parent) = self.path.parent() {
            create_private_dir(parent)
                .map_err(|err| ConfigError::DirCreateFailed(parent.to_path_buf(), err))?;
        }

        let text = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Invalid(format!("failed to serialize config: {err}")))?;
        write_private_file(&self.path, text.as_bytes())
            .map_err(|err| ConfigError::WriteFailed(self.path.clone(), err))
    }
}

/// Return the default credential path (`~/.config/shelly/config.json`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| config_path_under(&home))
}

/// Credential path relative to an explicit home directory.
pub fn config_path_under(home: &Path) -> PathBuf {
    home.join(".config")
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(dir)?;
    #[cfg(unix)]
    {
        // Tighten a directory that already existed with looser bits.
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700));
    }
    Ok(())
}

fn write_private_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    #[cfg(unix)]
    {
        // Mode on open only applies to newly created files.
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}
