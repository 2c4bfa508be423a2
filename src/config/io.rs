use super::types::UserConfig;
use crate::utils::default_warehouse_path;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the optional user config file inside the warehouse folder
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Warehouse directory {0} does not exist")]
    MissingRoot(PathBuf),
}

/// Canonical path of the user config file (`~/.warehouse/config.toml`).
#[must_use]
pub fn user_config_path() -> PathBuf {
    default_warehouse_path().join(CONFIG_FILE)
}

/// Load the user configuration from `path`.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist so callers
/// never need to handle the "absent file" case specially.
pub fn load_user_config(path: &Path) -> Result<UserConfig, ConfigError> {
    if !path.exists() {
        debug!("User config not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

/// A warehouse directory given explicitly must already exist; only the
/// default location is created on demand.
pub fn ensure_custom_root(path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConfigError::MissingRoot(path.to_path_buf()))
    }
}
