//! Sorting types for list queries.

use serde::{Deserialize, Serialize};

/// The single active column sort instruction.
///
/// `None` at the call sites means unsorted; the descriptor is replaced
/// wholesale on each toggle, never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Column name to sort by.
    pub name: String,
    /// `true` for ascending, `false` for descending.
    pub asc: bool,
}

impl SortKey {
    /// Create an ascending sort on the given column.
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asc: true,
        }
    }

    /// Create a descending sort on the given column.
    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asc: false,
        }
    }

    /// Advance the sort state for a click on a column header.
    ///
    /// The cycle on a single column is unsorted → ascending → descending
    /// → unsorted. Clicking a different column always restarts the cycle
    /// at ascending on that column.
    pub fn toggle(current: Option<SortKey>, column: &str) -> Option<SortKey> {
        match current {
            Some(key) if key.name == column => {
                if key.asc {
                    Some(SortKey::desc(key.name))
                } else {
                    None
                }
            }
            _ => Some(SortKey::asc(column)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle_returns_to_unsorted() {
        let first = SortKey::toggle(None, "price");
        assert_eq!(first, Some(SortKey::asc("price")));

        let second = SortKey::toggle(first, "price");
        assert_eq!(second, Some(SortKey::desc("price")));

        let third = SortKey::toggle(second, "price");
        assert_eq!(third, None);
    }

    #[test]
    fn test_toggle_other_column_restarts_ascending() {
        let from_asc = SortKey::toggle(Some(SortKey::asc("price")), "region");
        assert_eq!(from_asc, Some(SortKey::asc("region")));

        let from_desc = SortKey::toggle(Some(SortKey::desc("price")), "region");
        assert_eq!(from_desc, Some(SortKey::asc("region")));
    }

    #[test]
    fn test_wire_format() {
        let key = SortKey::desc("price");
        let json = serde_json::to_value(&key).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "price", "asc": false}));
    }
}
