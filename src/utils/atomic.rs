//! Atomic file write operations.
//!
//! Metadata and thumbnails are written through a temporary file in the
//! target directory and renamed into place, so a reader never observes a
//! half-written `info.yaml` or JPEG.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// The temp file is created next to the target (rename must not cross
/// filesystems) and is removed automatically if any step fails.
///
/// # Errors
///
/// Returns an `io::Error` if the path has no parent, the temp file cannot be
/// created or written, or the final rename fails.
pub async fn atomic_write(path: &Path, content: Vec<u8>) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write as _;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(&content)?;
        temp_file.flush()?;
        temp_file.persist(&target_path)?;

        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("info.yaml");

        atomic_write(&file_path, b"id: drill\n".to_vec()).await.unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "id: drill\n");
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("info.yaml");
        std::fs::write(&file_path, "a much longer initial content").unwrap();

        atomic_write(&file_path, b"short".to_vec()).await.unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "short");
    }

    #[tokio::test]
    async fn test_atomic_write_no_leftover_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("picture.jpg");

        atomic_write(&file_path, vec![0xFF, 0xD8, 0xFF]).await.unwrap();

        let count = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(count, 1, "Should only have the target file, no temp files");
    }

    #[tokio::test]
    async fn test_atomic_write_fails_with_missing_parent() {
        let result =
            atomic_write(Path::new("/nonexistent/deeply/nested/info.yaml"), Vec::new()).await;
        assert!(result.is_err());
    }
}
