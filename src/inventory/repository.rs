use super::sort::{sort_inventory, InventorySort};
use super::{InventoryFields, InventoryItem};
use crate::config::WarehouseConfig;
use crate::store::{ItemStore, PictureSlot, Scan, StoreError};
use image::DynamicImage;
use std::path::Path;
use tracing::info;

/// Inventory stored under `<warehouse>/inventory`.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    store: ItemStore<InventoryItem>,
}

impl InventoryRepository {
    #[must_use]
    pub fn new(config: &WarehouseConfig) -> Self {
        Self {
            store: ItemStore::new(config.inventory_root(), config.max_workers),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.store.root()
    }

    /// `InvalidId` or `NotFound` unless `id` names an existing item.
    pub fn require(&self, id: &str) -> Result<(), StoreError> {
        self.store.require(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    pub async fn items(&self) -> Result<Scan<InventoryItem>, StoreError> {
        self.store.scan().await
    }

    pub async fn sorted_items(
        &self,
        key: InventorySort,
        reversed: bool,
    ) -> Result<Scan<InventoryItem>, StoreError> {
        let mut scan = self.items().await?;
        sort_inventory(&mut scan.items, key, reversed);
        Ok(scan)
    }

    pub async fn get(&self, id: &str) -> Result<InventoryItem, StoreError> {
        self.store.read(id).await
    }

    /// Create a new item whose id is derived from its name.
    pub async fn add(&self, fields: InventoryFields) -> Result<InventoryItem, StoreError> {
        let name = fields.name.clone();
        let item = self
            .store
            .insert(&name, |id| InventoryItem::from_fields(id, fields))
            .await?;
        info!(id = %item.id, sku = %item.sku, name = %item.name, "[ADD] inventory");
        Ok(item)
    }

    /// Overwrite every descriptive field of an existing item.
    pub async fn update(
        &self,
        id: &str,
        fields: InventoryFields,
    ) -> Result<InventoryItem, StoreError> {
        self.store.require(id)?;
        let mut item = InventoryItem::from_fields(id, fields);
        self.store.write(&mut item).await?;
        info!(id, sku = %item.sku, quantity = %item.quantity, "[UPDATE] inventory");
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        info!(id, "[DELETE] inventory");
        Ok(())
    }

    pub async fn set_picture(&self, id: &str, data: Vec<u8>) -> Result<(), StoreError> {
        self.store.set_picture(id, PictureSlot::Item, data).await
    }

    pub async fn set_location_picture(&self, id: &str, data: Vec<u8>) -> Result<(), StoreError> {
        self.store.set_picture(id, PictureSlot::Location, data).await
    }

    pub async fn picture(&self, id: &str) -> Result<DynamicImage, StoreError> {
        self.store.picture(id, PictureSlot::Item).await
    }

    pub async fn location_picture(&self, id: &str) -> Result<DynamicImage, StoreError> {
        self.store.picture(id, PictureSlot::Location).await
    }

    /// Stored JPEG bytes, served without re-encoding.
    pub async fn picture_bytes(&self, id: &str, slot: PictureSlot) -> Result<Vec<u8>, StoreError> {
        self.store.picture_bytes(id, slot).await
    }
}
