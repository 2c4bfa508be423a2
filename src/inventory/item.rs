use crate::store::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive fields of an inventory item, as entered on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFields {
    pub sku: String,
    pub name: String,
    pub item_type: String,
    pub value: String,
    pub size: String,
    pub quantity: String,
    pub price: String,
    pub location: String,
}

/// A stocked part or consumable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(rename = "itemtype")]
    pub item_type: String,
    pub value: String,
    pub size: String,
    pub quantity: String,
    pub price: String,
    pub location: String,
    #[serde(rename = "update")]
    pub updated: DateTime<Utc>,
}

impl InventoryItem {
    #[must_use]
    pub fn from_fields<I: Into<String>>(id: I, fields: InventoryFields) -> Self {
        let InventoryFields {
            sku,
            name,
            item_type,
            value,
            size,
            quantity,
            price,
            location,
        } = fields;
        Self {
            id: id.into(),
            sku,
            name,
            item_type,
            value,
            size,
            quantity,
            price,
            location,
            updated: DateTime::<Utc>::default(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> InventoryFields {
        InventoryFields {
            sku: self.sku.clone(),
            name: self.name.clone(),
            item_type: self.item_type.clone(),
            value: self.value.clone(),
            size: self.size.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
            location: self.location.clone(),
        }
    }
}

impl Record for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn set_updated(&mut self, at: DateTime<Utc>) {
        self.updated = at;
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, sku {}) x{} at {}",
            self.id, self.name, self.sku, self.quantity, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> InventoryFields {
        InventoryFields {
            sku: "RES-10K".to_string(),
            name: "Resistor 10k".to_string(),
            item_type: "resistor".to_string(),
            value: "10k".to_string(),
            size: "0805".to_string(),
            quantity: "500".to_string(),
            price: "0.02".to_string(),
            location: "drawer 4".to_string(),
        }
    }

    #[test]
    fn test_from_fields_and_back() {
        let item = InventoryItem::from_fields("resistor10", fields());
        assert_eq!(item.id, "resistor10");
        assert_eq!(item.fields(), fields());
    }

    #[test]
    fn test_yaml_uses_itemtype_and_update_keys() {
        let item = InventoryItem::from_fields("resistor10", fields());
        let yaml = serde_yaml::to_string(&item).unwrap();
        assert!(yaml.contains("itemtype: resistor"));
        assert!(yaml.contains("update:"));
        assert!(!yaml.contains("item_type"));
    }

    #[test]
    fn test_yaml_missing_fields_default() {
        let item: InventoryItem = serde_yaml::from_str("sku: ABC\nquantity: '3'\n").unwrap();
        assert_eq!(item.sku, "ABC");
        assert_eq!(item.quantity, "3");
        assert!(item.name.is_empty());
        assert!(item.location.is_empty());
    }

    #[test]
    fn test_display() {
        let item = InventoryItem::from_fields("resistor10", fields());
        assert_eq!(
            item.to_string(),
            "resistor10 (Resistor 10k, sku RES-10K) x500 at drawer 4"
        );
    }
}
