//! Inventory: stocked parts and consumables.

mod item;
mod repository;
mod sort;

pub use item::{InventoryFields, InventoryItem};
pub use repository::InventoryRepository;
pub use sort::{sort_inventory, InventorySort};
