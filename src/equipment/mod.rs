//! Equipment: items that are lent out and returned.

mod item;
mod repository;
mod sort;

pub use item::{EquipmentItem, RETURN_CODE};
pub use repository::{EquipmentChanges, EquipmentRepository};
pub use sort::{sort_equipment, EquipmentSort};
