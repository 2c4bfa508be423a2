//! Concurrent scan of an item root.

use super::{Record, Scan, ScanError, StoreError, METADATA_FILE};
use crate::utils::format_display_path;
use futures::stream::{self, StreamExt as _};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Load every item below `root`, reading at most `max_workers` metadata
/// files at a time.
///
/// A missing root is created and yields an empty scan. Plain files at the
/// top level are ignored. Subdirectories that fail to load are collected
/// into the scan's error; the rest are still returned.
pub async fn scan_root<R: Record>(root: &Path, max_workers: usize) -> Result<Scan<R>, StoreError> {
    let mut entries = match fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(root = %format_display_path(root), "Item root missing, creating it");
            fs::create_dir_all(root)
                .await
                .map_err(|source| StoreError::io(root, source))?;
            return Ok(Scan::empty());
        }
        Err(e) => return Err(StoreError::io(root, e)),
    };

    let mut failures = Vec::new();
    let mut dirs = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => match entry.file_type().await {
                Ok(kind) if kind.is_dir() => dirs.push(entry.path()),
                Ok(_) => {}
                Err(e) => failures.push(StoreError::io(&entry.path(), e)),
            },
            Ok(None) => break,
            Err(e) => {
                failures.push(StoreError::io(root, e));
                break;
            }
        }
    }

    let results: Vec<Result<R, StoreError>> = stream::iter(dirs)
        .map(read_item_dir::<R>)
        .buffer_unordered(max_workers.max(1))
        .collect()
        .await;

    let mut items = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(item) => items.push(item),
            Err(e) => failures.push(e),
        }
    }

    if !failures.is_empty() {
        warn!(
            root = %format_display_path(root),
            failed = failures.len(),
            loaded = items.len(),
            "Some items failed to load"
        );
    }
    debug!(root = %format_display_path(root), count = items.len(), "Scanned items");

    Ok(Scan {
        items,
        error: ScanError::from_failures(root, failures),
    })
}

/// Read `<dir>/info.yaml`. An empty id in the file is filled from the
/// directory name.
pub async fn read_item_dir<R: Record>(dir: PathBuf) -> Result<R, StoreError> {
    let path = dir.join(METADATA_FILE);
    let data = fs::read(&path)
        .await
        .map_err(|e| StoreError::io(&path, e))?;
    let mut record: R =
        serde_yaml::from_slice(&data).map_err(|source| StoreError::Yaml { path, source })?;

    if record.id().is_empty() {
        if let Some(name) = dir.file_name() {
            record.set_id(name.to_string_lossy().into_owned());
        }
    }
    Ok(record)
}
