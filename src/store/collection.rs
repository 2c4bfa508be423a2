use super::images::{self, PictureSlot};
use super::{id, loader, Record, Scan, StoreError, METADATA_FILE};
use crate::utils::{atomic_write, format_display_path};
use chrono::Utc;
use image::DynamicImage;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Directory-per-item storage for one record type.
///
/// Each item lives at `<root>/<id>/` with its metadata in `info.yaml` and
/// its two pictures next to it.
#[derive(Debug, Clone)]
pub struct ItemStore<R> {
    root: PathBuf,
    max_workers: usize,
    record: PhantomData<fn() -> R>,
}

impl<R: Record> ItemStore<R> {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P, max_workers: usize) -> Self {
        Self {
            root: root.into(),
            max_workers: max_workers.max(1),
            record: PhantomData,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of `id`, whether or not it exists.
    pub fn item_dir(&self, id: &str) -> Result<PathBuf, StoreError> {
        id::validate_id(id)?;
        Ok(self.root.join(id))
    }

    /// Directory of `id`, which must exist.
    fn existing_dir(&self, id: &str) -> Result<PathBuf, StoreError> {
        let dir = self.item_dir(id)?;
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(StoreError::NotFound(id.to_string()))
        }
    }

    /// `InvalidId` or `NotFound` unless `id` names an existing item.
    pub fn require(&self, id: &str) -> Result<(), StoreError> {
        self.existing_dir(id).map(drop)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.require(id).is_ok()
    }

    pub async fn scan(&self) -> Result<Scan<R>, StoreError> {
        loader::scan_root(&self.root, self.max_workers).await
    }

    pub async fn read(&self, id: &str) -> Result<R, StoreError> {
        let dir = self.existing_dir(id)?;
        loader::read_item_dir(dir).await
    }

    /// Stamp the record and persist it, replacing any previous metadata.
    pub async fn write(&self, record: &mut R) -> Result<(), StoreError> {
        let dir = self.item_dir(record.id())?;
        record.set_updated(Utc::now());

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::io(&dir, e))?;
        let yaml = serde_yaml::to_string(&*record).map_err(|source| StoreError::Serialize {
            id: record.id().to_string(),
            source,
        })?;

        let path = dir.join(METADATA_FILE);
        atomic_write(&path, yaml.into_bytes())
            .await
            .map_err(|e| StoreError::io(&path, e))?;
        debug!(id = record.id(), "Wrote item metadata");
        Ok(())
    }

    /// Allocate an id for `name`, build the record for it and persist it
    /// together with placeholder pictures.
    ///
    /// On failure the freshly claimed directory is removed again.
    pub async fn insert<F>(&self, name: &str, build: F) -> Result<R, StoreError>
    where
        F: FnOnce(String) -> R + Send,
    {
        let id = id::allocate(&self.root, name).await?;
        match self.populate(build(id.clone())).await {
            Ok(record) => Ok(record),
            Err(e) => {
                self.discard(&id).await;
                Err(e)
            }
        }
    }

    async fn populate(&self, mut record: R) -> Result<R, StoreError> {
        self.write(&mut record).await?;
        let dir = self.item_dir(record.id())?;
        let placeholder = images::placeholder_jpeg()?;
        for slot in PictureSlot::ALL {
            let path = dir.join(slot.file_name());
            atomic_write(&path, placeholder.clone())
                .await
                .map_err(|e| StoreError::io(&path, e))?;
        }
        Ok(record)
    }

    async fn discard(&self, id: &str) {
        let dir = self.root.join(id);
        if let Err(e) = fs::remove_dir_all(&dir).await {
            warn!(
                dir = %format_display_path(&dir),
                error = %e,
                "Failed to clean up partially created item"
            );
        }
    }

    /// Remove the item directory and everything in it.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let dir = self.item_dir(id)?;
        match fs::remove_dir_all(&dir).await {
            Ok(()) => {
                debug!(id, "Deleted item");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(StoreError::io(&dir, e)),
        }
    }

    /// Normalize an uploaded image and store it in `slot`.
    pub async fn set_picture(
        &self,
        id: &str,
        slot: PictureSlot,
        data: Vec<u8>,
    ) -> Result<(), StoreError> {
        let dir = self.existing_dir(id)?;
        let max_side = slot.max_side();
        let jpeg =
            tokio::task::spawn_blocking(move || images::normalize_picture(&data, max_side))
                .await??;

        let path = dir.join(slot.file_name());
        atomic_write(&path, jpeg)
            .await
            .map_err(|e| StoreError::io(&path, e))?;
        debug!(id, picture = slot.file_name(), "Stored picture");
        Ok(())
    }

    /// Raw bytes of the stored picture in `slot`.
    pub async fn picture_bytes(&self, id: &str, slot: PictureSlot) -> Result<Vec<u8>, StoreError> {
        let path = self.existing_dir(id)?.join(slot.file_name());
        fs::read(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(format!("{id}/{}", slot.file_name()))
            } else {
                StoreError::io(&path, e)
            }
        })
    }

    /// Decode the stored picture in `slot`.
    pub async fn picture(&self, id: &str, slot: PictureSlot) -> Result<DynamicImage, StoreError> {
        let data = self.picture_bytes(id, slot).await?;
        Ok(tokio::task::spawn_blocking(move || images::decode_jpeg(&data)).await??)
    }
}
