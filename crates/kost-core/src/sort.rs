//! # Sort Pipeline
//!
//! Exactly one sort descriptor is active per screen at a time. Sorting runs
//! on the already-filtered set (so displayed counts stay correct) and is
//! stable: entities with equal sort keys keep their pre-sort relative order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::field::{FieldKey, SortValue};

// =============================================================================
// Sort Descriptor
// =============================================================================

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flips the direction (column header toggling).
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: one field key plus a direction.
///
/// Serialize-only: this travels outward in snapshots; inbound sort intents
/// arrive as method arguments, never deserialized (a `&'static str` field
/// key cannot be borrowed from transient JSON anyway).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SortDescriptor {
    pub field: FieldKey,
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// Creates an ascending descriptor (the screen-default shape).
    pub const fn ascending(field: FieldKey) -> Self {
        SortDescriptor {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending descriptor.
    pub const fn descending(field: FieldKey) -> Self {
        SortDescriptor {
            field,
            direction: SortDirection::Descending,
        }
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Stably sorts filtered indices by the sort key of the entity behind each.
///
/// `descending` reverses the comparator's sign; it does NOT reverse the
/// sorted slice, which would break tie stability.
pub fn sort_indices<T>(
    items: &[T],
    indices: &mut [usize],
    sort_key: fn(&T) -> SortValue,
    direction: SortDirection,
) {
    indices.sort_by(|&a, &b| {
        let ord = sort_key(&items[a]).cmp(&sort_key(&items[b]));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn categories(names: &[&str]) -> Vec<Category> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Category {
                id: i as i64 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    fn name_key(c: &Category) -> SortValue {
        SortValue::text(c.name.clone())
    }

    #[test]
    fn test_ascending_is_monotonic() {
        let items = categories(&["listrik", "air", "kebersihan"]);
        let mut idx: Vec<usize> = (0..items.len()).collect();
        sort_indices(&items, &mut idx, name_key, SortDirection::Ascending);

        let names: Vec<&str> = idx.iter().map(|&i| items[i].name.as_str()).collect();
        assert_eq!(names, vec!["air", "kebersihan", "listrik"]);
    }

    #[test]
    fn test_descending_reverses_comparator() {
        let items = categories(&["listrik", "air", "kebersihan"]);
        let mut idx: Vec<usize> = (0..items.len()).collect();
        sort_indices(&items, &mut idx, name_key, SortDirection::Descending);

        let names: Vec<&str> = idx.iter().map(|&i| items[i].name.as_str()).collect();
        assert_eq!(names, vec!["listrik", "kebersihan", "air"]);
    }

    #[test]
    fn test_ties_keep_pre_sort_order() {
        // Two "air" entries with different ids; stable sort must keep id
        // order 2 then 4 (their order in the unsorted input).
        let items = vec![
            Category { id: 1, name: "listrik".to_string() },
            Category { id: 2, name: "air".to_string() },
            Category { id: 3, name: "kebersihan".to_string() },
            Category { id: 4, name: "air".to_string() },
        ];
        let mut idx: Vec<usize> = (0..items.len()).collect();
        sort_indices(&items, &mut idx, name_key, SortDirection::Ascending);

        let ids: Vec<i64> = idx.iter().map(|&i| items[i].id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_descending_ties_also_keep_pre_sort_order() {
        let items = vec![
            Category { id: 1, name: "air".to_string() },
            Category { id: 2, name: "air".to_string() },
        ];
        let mut idx: Vec<usize> = (0..items.len()).collect();
        sort_indices(&items, &mut idx, name_key, SortDirection::Descending);

        let ids: Vec<i64> = idx.iter().map(|&i| items[i].id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
    }
}
