mod atomic;

pub use atomic::atomic_write;

use std::path::{Path, PathBuf};

/// The name of the warehouse folder under the home directory
pub const WAREHOUSE_FOLDER: &str = ".warehouse";

/// Default warehouse location (`~/.warehouse`), falling back to the working
/// directory when no home directory can be resolved.
#[must_use]
pub fn default_warehouse_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(WAREHOUSE_FOLDER)
}

/// Format a path for display, replacing home directory with ~/
#[must_use]
pub fn format_display_path(path: &Path) -> String {
    replace_homedir::replace_homedir(&path.to_string_lossy(), "~")
}
