use crate::store::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `who` value meaning the item is being returned rather than borrowed
pub const RETURN_CODE: &str = "RETURN_CODE";

/// A piece of equipment that can be lent out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub price: String,
    /// Holder while borrowed, the return location otherwise.
    pub location: String,
    #[serde(rename = "update")]
    pub updated: DateTime<Utc>,
    #[serde(rename = "borrowed")]
    pub in_use: bool,
}

impl EquipmentItem {
    #[must_use]
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Lend the item to `who`, or return it when `who` is [`RETURN_CODE`].
    pub fn assign(&mut self, who: &str, return_location: &str) {
        if who == RETURN_CODE {
            self.in_use = false;
            self.location = return_location.to_string();
        } else {
            self.in_use = true;
            self.location = who.to_string();
        }
    }
}

impl Record for EquipmentItem {
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

impl fmt::Display for EquipmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) at {}, in use: {}, updated {}",
            self.id,
            self.name,
            self.location,
            self.in_use,
            self.updated.to_rfc3339()
        )
    }
}
