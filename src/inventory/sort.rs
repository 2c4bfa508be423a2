use super::InventoryItem;
use crate::sort::{compare_price_values, normalize_key, sort_with, ParseSortError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort keys for inventory listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventorySort {
    Name,
    Date,
    Price,
    #[default]
    PriceValue,
}

impl InventorySort {
    const EXPECTED: &'static str = "name, date, price, price-value";

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InventorySort::Name => "name",
            InventorySort::Date => "date",
            InventorySort::Price => "price",
            InventorySort::PriceValue => "price-value",
        }
    }

    #[must_use]
    pub fn compare(self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        match self {
            InventorySort::Name => a.name.cmp(&b.name),
            InventorySort::Date => a.updated.cmp(&b.updated),
            InventorySort::Price => a.price.cmp(&b.price),
            InventorySort::PriceValue => compare_price_values(&a.price, &b.price),
        }
    }
}

impl FromStr for InventorySort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "name" => Ok(InventorySort::Name),
            "date" | "updated" => Ok(InventorySort::Date),
            "price" => Ok(InventorySort::Price),
            "price-value" => Ok(InventorySort::PriceValue),
            _ => Err(ParseSortError {
                key: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for InventorySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable in-place sort of `items` by `key`.
pub fn sort_inventory(items: &mut [InventoryItem], key: InventorySort, reversed: bool) {
    sort_with(items, reversed, |a, b| key.compare(a, b));
}
