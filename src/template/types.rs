use crate::equipment::{EquipmentItem, RETURN_CODE};
use crate::inventory::InventoryItem;
use serde::Serialize;

/// Pages the web interface renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    EquipmentList,
    EquipmentAdd,
    EquipmentEdit,
    InventoryList,
    InventoryAdd,
    InventoryEdit,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::EquipmentList,
        Page::EquipmentAdd,
        Page::EquipmentEdit,
        Page::InventoryList,
        Page::InventoryAdd,
        Page::InventoryEdit,
    ];

    /// Name the template is registered under.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::EquipmentList => "equipment",
            Page::EquipmentAdd => "equipment-add",
            Page::EquipmentEdit => "equipment-edit",
            Page::InventoryList => "inventory",
            Page::InventoryAdd => "inventory-add",
            Page::InventoryEdit => "inventory-edit",
        }
    }

    #[must_use]
    pub(super) fn source(self) -> &'static str {
        match self {
            Page::Dashboard => include_str!("../../templates/dashboard.hbs"),
            Page::EquipmentList => include_str!("../../templates/equipment.hbs"),
            Page::EquipmentAdd => include_str!("../../templates/equipment-add.hbs"),
            Page::EquipmentEdit => include_str!("../../templates/equipment-edit.hbs"),
            Page::InventoryList => include_str!("../../templates/inventory.hbs"),
            Page::InventoryAdd => include_str!("../../templates/inventory-add.hbs"),
            Page::InventoryEdit => include_str!("../../templates/inventory-edit.hbs"),
        }
    }
}

/// Context for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardContext {
    pub title: String,
    pub equipment_count: usize,
    pub borrowed_count: usize,
    pub inventory_count: usize,
    pub notice: Option<String>,
}

/// Context for the equipment listing
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentListContext {
    pub title: String,
    pub items: Vec<EquipmentItem>,
    pub sort: String,
    pub reversed: bool,
    pub notice: Option<String>,
    pub return_code: &'static str,
}

/// Context for the equipment add and edit forms
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentFormContext {
    pub title: String,
    pub item: Option<EquipmentItem>,
    pub return_code: &'static str,
}

impl EquipmentFormContext {
    #[must_use]
    pub fn add() -> Self {
        Self {
            title: "Add equipment".to_string(),
            item: None,
            return_code: RETURN_CODE,
        }
    }

    #[must_use]
    pub fn edit(item: EquipmentItem) -> Self {
        Self {
            title: format!("Edit {}", item.name),
            item: Some(item),
            return_code: RETURN_CODE,
        }
    }
}

/// Context for the inventory listing
#[derive(Debug, Clone, Serialize)]
pub struct InventoryListContext {
    pub title: String,
    pub items: Vec<InventoryItem>,
    pub sort: String,
    pub reversed: bool,
    pub notice: Option<String>,
}

/// Context for the inventory add and edit forms
#[derive(Debug, Clone, Serialize)]
pub struct InventoryFormContext {
    pub title: String,
    pub item: Option<InventoryItem>,
}

impl InventoryFormContext {
    #[must_use]
    pub fn add() -> Self {
        Self {
            title: "Add inventory".to_string(),
            item: None,
        }
    }

    #[must_use]
    pub fn edit(item: InventoryItem) -> Self {
        Self {
            title: format!("Edit {}", item.name),
            item: Some(item),
        }
    }
}
