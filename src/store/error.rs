//! Error types for item storage.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for a single storage operation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Could not parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Could not serialize item '{id}': {source}")]
    Serialize {
        id: String,
        source: serde_yaml::Error,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid item id '{0}'")]
    InvalidId(String),

    #[error("No free id left for '{0}'")]
    NamespaceExhausted(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub(super) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Every per-item failure of one scan, reported as a single error.
#[derive(Debug)]
pub struct ScanError {
    root: PathBuf,
    failures: Vec<StoreError>,
}

impl ScanError {
    /// `None` when there is nothing to report.
    #[must_use]
    pub fn from_failures(root: &Path, failures: Vec<StoreError>) -> Option<Self> {
        (!failures.is_empty()).then(|| Self {
            root: root.to_path_buf(),
            failures,
        })
    }

    #[must_use]
    pub fn failures(&self) -> &[StoreError] {
        &self.failures
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} item(s) under {} failed to load",
            self.failures.len(),
            self.root.display()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ScanError {}
