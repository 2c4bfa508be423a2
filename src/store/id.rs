//! Directory-name allocation for new items.

use super::StoreError;
use std::io;
use std::path::Path;
use tokio::fs;

/// Longest base key derived from a display name
pub const MAX_KEY_LEN: usize = 10;

/// Base key for names that contain no usable characters
const FALLBACK_KEY: &str = "item";

/// Reduce a display name to its base key: ASCII alphanumerics only,
/// lowercased, at most [`MAX_KEY_LEN`] characters.
#[must_use]
pub fn clean_key(name: &str) -> String {
    let key: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(MAX_KEY_LEN)
        .collect();
    if key.is_empty() {
        FALLBACK_KEY.to_string()
    } else {
        key
    }
}

/// The base key followed by `<base>_a` through `<base>_z`.
#[must_use]
pub fn candidate_keys(base: &str) -> Vec<String> {
    std::iter::once(base.to_string())
        .chain(('a'..='z').map(|mark| format!("{base}_{mark}")))
        .collect()
}

/// Ids accepted from callers: non-empty, ASCII alphanumerics and `_`.
pub fn validate_id(id: &str) -> Result<(), StoreError> {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(StoreError::InvalidId(id.to_string()))
    }
}

/// Claim the first free candidate for `name` by creating its directory.
///
/// `create_dir` fails on an existing entry, so two concurrent allocations
/// never hand out the same id.
pub async fn allocate(root: &Path, name: &str) -> Result<String, StoreError> {
    fs::create_dir_all(root)
        .await
        .map_err(|e| StoreError::io(root, e))?;

    let base = clean_key(name);
    for candidate in candidate_keys(&base) {
        let dir = root.join(&candidate);
        match fs::create_dir(&dir).await {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(StoreError::io(&dir, e)),
        }
    }
    Err(StoreError::NamespaceExhausted(base))
}
