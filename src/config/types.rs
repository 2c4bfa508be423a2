use crate::utils::default_warehouse_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location assigned to equipment when it is returned
pub const DEFAULT_RETURN_LOCATION: &str = "returned";
/// Upper bound on concurrent metadata reads during a scan
pub const DEFAULT_MAX_WORKERS: usize = 16;
/// Port the web server listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 8080;
/// Sub-folder of the warehouse holding equipment items
pub const EQUIPMENT_FOLDER: &str = "equipment";
/// Sub-folder of the warehouse holding inventory items
pub const INVENTORY_FOLDER: &str = "inventory";

/// Runtime configuration handed to the repositories at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// Warehouse directory; module roots live directly below it.
    pub root: PathBuf,
    /// Location written to equipment on return.
    pub return_location: String,
    /// Maximum number of item directories read concurrently.
    pub max_workers: usize,
}

impl WarehouseConfig {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            return_location: DEFAULT_RETURN_LOCATION.to_string(),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }

    #[must_use]
    pub fn with_return_location<S: Into<String>>(mut self, location: S) -> Self {
        self.return_location = location.into();
        self
    }

    /// Zero is clamped to one worker.
    #[must_use]
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    #[must_use]
    pub fn equipment_root(&self) -> PathBuf {
        self.root.join(EQUIPMENT_FOLDER)
    }

    #[must_use]
    pub fn inventory_root(&self) -> PathBuf {
        self.root.join(INVENTORY_FOLDER)
    }
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self::new(default_warehouse_path())
    }
}

/// `[server]` table of the user config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub return_location: Option<String>,
    pub max_workers: Option<usize>,
}

impl ServerConfig {
    /// Values set in `other` win over the ones in `self`.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            port: other.port.or(self.port),
            return_location: other.return_location.or(self.return_location),
            max_workers: other.max_workers.or(self.max_workers),
        }
    }

    /// Write the set values into `config`, leaving its other fields alone.
    #[must_use]
    pub fn apply(&self, mut config: WarehouseConfig) -> WarehouseConfig {
        if let Some(location) = &self.return_location {
            config.return_location.clone_from(location);
        }
        if let Some(max_workers) = self.max_workers {
            config = config.with_max_workers(max_workers);
        }
        config
    }

    #[must_use]
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

/// `[auth]` table; basic auth is enabled only when this table is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

/// Top-level user configuration, deserialized from
/// `~/.warehouse/config.toml`.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// `Default` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}
