mod init;

pub use init::{init_logging, parse_rotation};

use crate::utils::default_warehouse_path;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename used by the server.
pub const LOG_FILENAME: &str = "warehouse.log";

/// Crate target the default filter applies to.
pub(crate) const LOG_TARGET: &str = "warehouse";

/// Configuration for the logging system.
#[derive(Debug)]
pub struct LogConfig {
    /// Directory where log files will be written.
    pub log_dir: PathBuf,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: Level,
    /// Whether to use JSON format for logs.
    pub json_format: bool,
    /// Log rotation period.
    pub rotation: Rotation,
}

impl LogConfig {
    /// Default configuration writing below the given warehouse directory.
    #[must_use]
    pub fn for_warehouse(warehouse: &std::path::Path) -> Self {
        Self {
            log_dir: warehouse.join("logs"),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_warehouse_path().join("logs"),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
