//! Warehouse configuration.
//!
//! [`WarehouseConfig`] is the explicit runtime configuration passed to the
//! repositories. [`UserConfig`] is the optional `config.toml` the binary
//! merges with its command line.

mod io;
mod types;

pub use io::{ensure_custom_root, load_user_config, user_config_path, ConfigError, CONFIG_FILE};
pub use types::{
    AuthConfig, ServerConfig, UserConfig, WarehouseConfig, DEFAULT_MAX_WORKERS, DEFAULT_PORT,
    DEFAULT_RETURN_LOCATION, EQUIPMENT_FOLDER, INVENTORY_FOLDER,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
