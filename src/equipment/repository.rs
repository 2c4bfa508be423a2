use super::sort::{sort_equipment, EquipmentSort};
use super::{EquipmentItem, RETURN_CODE};
use crate::config::WarehouseConfig;
use crate::store::{ItemStore, PictureSlot, Scan, StoreError};
use image::DynamicImage;
use std::path::Path;
use tracing::info;

/// Fields of an equipment item editable through the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentChanges {
    pub name: String,
    pub price: String,
}

/// Equipment stored under `<warehouse>/equipment`.
#[derive(Debug, Clone)]
pub struct EquipmentRepository {
    store: ItemStore<EquipmentItem>,
    return_location: String,
}

impl EquipmentRepository {
    #[must_use]
    pub fn new(config: &WarehouseConfig) -> Self {
        Self {
            store: ItemStore::new(config.equipment_root(), config.max_workers),
            return_location: config.return_location.clone(),
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

    /// Every item under the root, in no particular order.
    pub async fn items(&self) -> Result<Scan<EquipmentItem>, StoreError> {
        self.store.scan().await
    }

    pub async fn sorted_items(
        &self,
        key: EquipmentSort,
        reversed: bool,
    ) -> Result<Scan<EquipmentItem>, StoreError> {
        let mut scan = self.items().await?;
        sort_equipment(&mut scan.items, key, reversed);
        Ok(scan)
    }

    pub async fn get(&self, id: &str) -> Result<EquipmentItem, StoreError> {
        self.store.read(id).await
    }

    /// Create a new item, initially returned and holding placeholder
    /// pictures.
    pub async fn add(&self, name: &str) -> Result<EquipmentItem, StoreError> {
        let return_location = self.return_location.as_str();
        let item = self
            .store
            .insert(name, |id| {
                let mut item = EquipmentItem::new(id, name);
                item.assign(RETURN_CODE, return_location);
                item
            })
            .await?;
        info!(id = %item.id, name = %item.name, "[ADD] equipment");
        Ok(item)
    }

    /// Rewrite the name and price, keeping the loan state.
    pub async fn edit(
        &self,
        id: &str,
        changes: EquipmentChanges,
    ) -> Result<EquipmentItem, StoreError> {
        let mut item = self.store.read(id).await?;
        item.name = changes.name;
        item.price = changes.price;
        self.store.write(&mut item).await?;
        info!(id, name = %item.name, price = %item.price, "[EDIT] equipment");
        Ok(item)
    }

    /// Lend the item to `who`, or return it when `who` is [`RETURN_CODE`].
    pub async fn use_item(&self, id: &str, who: &str) -> Result<EquipmentItem, StoreError> {
        let mut item = self.store.read(id).await?;
        item.assign(who, &self.return_location);
        self.store.write(&mut item).await?;
        if item.in_use {
            info!(id, who = %item.location, "[USE] equipment borrowed");
        } else {
            info!(id, location = %item.location, "[USE] equipment returned");
        }
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        info!(id, "[DELETE] equipment");
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
