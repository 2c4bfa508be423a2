//! Helpers shared by the equipment and inventory sort keys.

use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort key '{key}', expected one of: {expected}")]
pub struct ParseSortError {
    pub key: String,
    pub expected: &'static str,
}

/// Normalize a sort key from a query string: trimmed, lowercase, `_`
/// treated as `-`.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

/// Parse a free-form price such as `"$1,250.00"` or `"12 EUR"`.
///
/// Everything except digits, `.` and a leading `-` is ignored.
#[must_use]
pub fn parse_price(price: &str) -> Option<f64> {
    let mut digits = String::with_capacity(price.len());
    for c in price.chars() {
        if c.is_ascii_digit() || c == '.' || (c == '-' && digits.is_empty()) {
            digits.push(c);
        }
    }
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Numeric price order. Unparseable prices come first, ordered
/// lexicographically among themselves.
#[must_use]
pub fn compare_price_values(a: &str, b: &str) -> Ordering {
    match (parse_price(a), parse_price(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Stable sort, optionally inverted.
pub(crate) fn sort_with<T, F>(items: &mut [T], reversed: bool, compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| {
        let cmp = compare(a, b);
        if reversed {
            cmp.reverse()
        } else {
            cmp
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12"), Some(12.0));
        assert_eq!(parse_price("$1,250.50"), Some(1250.5));
        assert_eq!(parse_price("12 EUR"), Some(12.0));
        assert_eq!(parse_price("-3.5"), Some(-3.5));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price("1.2.3"), None);
    }

    #[test]
    fn test_compare_price_values_numeric() {
        assert_eq!(compare_price_values("9", "10"), Ordering::Less);
        assert_eq!(compare_price_values("$1,000", "999"), Ordering::Greater);
        assert_eq!(compare_price_values("5.00", "5"), Ordering::Equal);
    }

    #[test]
    fn test_compare_price_values_unparseable_first() {
        assert_eq!(compare_price_values("n/a", "0"), Ordering::Less);
        assert_eq!(compare_price_values("0", ""), Ordering::Greater);
        assert_eq!(compare_price_values("", "n/a"), Ordering::Less);
    }

    #[test]
    fn test_sort_with_reversed_keeps_ties_stable() {
        let mut items = vec![(1u8, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        sort_with(&mut items, true, |a, b| a.0.cmp(&b.0));
        assert_eq!(items, [(1, 'a'), (1, 'c'), (0, 'b'), (0, 'd')]);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key(" In_Use-Date "), "in-use-date");
    }
}
