use super::EquipmentItem;
use crate::sort::{compare_price_values, normalize_key, sort_with, ParseSortError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort keys for equipment listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EquipmentSort {
    Name,
    Date,
    /// Lexicographic on the price string.
    Price,
    /// Numeric on the parsed price.
    PriceValue,
    /// Available before borrowed.
    InUse,
    /// Available before borrowed, then by update time.
    #[default]
    InUseDate,
}

impl EquipmentSort {
    const EXPECTED: &'static str = "name, date, price, price-value, in-use, in-use-date";

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentSort::Name => "name",
            EquipmentSort::Date => "date",
            EquipmentSort::Price => "price",
            EquipmentSort::PriceValue => "price-value",
            EquipmentSort::InUse => "in-use",
            EquipmentSort::InUseDate => "in-use-date",
        }
    }

    #[must_use]
    pub fn compare(self, a: &EquipmentItem, b: &EquipmentItem) -> Ordering {
        match self {
            EquipmentSort::Name => a.name.cmp(&b.name),
            EquipmentSort::Date => a.updated.cmp(&b.updated),
            EquipmentSort::Price => a.price.cmp(&b.price),
            EquipmentSort::PriceValue => compare_price_values(&a.price, &b.price),
            EquipmentSort::InUse => a.in_use.cmp(&b.in_use),
            EquipmentSort::InUseDate => a
                .in_use
                .cmp(&b.in_use)
                .then_with(|| a.updated.cmp(&b.updated)),
        }
    }
}

impl FromStr for EquipmentSort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "name" => Ok(EquipmentSort::Name),
            "date" | "updated" => Ok(EquipmentSort::Date),
            "price" => Ok(EquipmentSort::Price),
            "price-value" => Ok(EquipmentSort::PriceValue),
            "in-use" | "borrowed" => Ok(EquipmentSort::InUse),
            "in-use-date" => Ok(EquipmentSort::InUseDate),
            _ => Err(ParseSortError {
                key: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for EquipmentSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable in-place sort of `items` by `key`.
pub fn sort_equipment(items: &mut [EquipmentItem], key: EquipmentSort, reversed: bool) {
    sort_with(items, reversed, |a, b| key.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone as _, Utc};

    fn item(id: &str, name: &str, in_use: bool, day: u32) -> EquipmentItem {
        EquipmentItem {
            id: id.to_string(),
            name: name.to_string(),
            updated: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            in_use,
            ..EquipmentItem::default()
        }
    }

    fn ids(items: &[EquipmentItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("name".parse::<EquipmentSort>(), Ok(EquipmentSort::Name));
        assert_eq!("DATE".parse::<EquipmentSort>(), Ok(EquipmentSort::Date));
        assert_eq!("price_value".parse::<EquipmentSort>(), Ok(EquipmentSort::PriceValue));
        assert_eq!("in-use".parse::<EquipmentSort>(), Ok(EquipmentSort::InUse));
        assert_eq!("in-use-date".parse::<EquipmentSort>(), Ok(EquipmentSort::InUseDate));
        assert!("colour".parse::<EquipmentSort>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for key in [
            EquipmentSort::Name,
            EquipmentSort::Date,
            EquipmentSort::Price,
            EquipmentSort::PriceValue,
            EquipmentSort::InUse,
            EquipmentSort::InUseDate,
        ] {
            assert_eq!(key.to_string().parse::<EquipmentSort>(), Ok(key));
        }
    }

    #[test]
    fn test_sort_by_name_case_sensitive() {
        let mut items = vec![
            item("b", "bench", false, 1),
            item("a", "Anvil", false, 1),
            item("z", "Zapper", false, 1),
        ];
        sort_equipment(&mut items, EquipmentSort::Name, false);
        assert_eq!(ids(&items), ["a", "z", "b"]);

        sort_equipment(&mut items, EquipmentSort::Name, true);
        assert_eq!(ids(&items), ["b", "z", "a"]);
    }

    #[test]
    fn test_sort_in_use_date_groups_then_orders() {
        let mut items = vec![
            item("late_out", "x", true, 9),
            item("late_in", "x", false, 8),
            item("early_out", "x", true, 2),
            item("early_in", "x", false, 1),
        ];
        sort_equipment(&mut items, EquipmentSort::InUseDate, false);
        assert_eq!(ids(&items), ["early_in", "late_in", "early_out", "late_out"]);
    }

    #[test]
    fn test_sort_price_lexicographic_vs_numeric() {
        let mut items = vec![item("ten", "x", false, 1), item("nine", "x", false, 1)];
        items[0].price = "10".to_string();
        items[1].price = "9".to_string();

        sort_equipment(&mut items, EquipmentSort::Price, false);
        assert_eq!(ids(&items), ["ten", "nine"]);

        sort_equipment(&mut items, EquipmentSort::PriceValue, false);
        assert_eq!(ids(&items), ["nine", "ten"]);
    }

    #[test]
    fn test_sort_in_use_is_stable() {
        let mut items = vec![
            item("a", "x", true, 1),
            item("b", "x", false, 1),
            item("c", "x", true, 1),
            item("d", "x", false, 1),
        ];
        sort_equipment(&mut items, EquipmentSort::InUse, false);
        assert_eq!(ids(&items), ["b", "d", "a", "c"]);
    }
}
