//! # Field Catalog
//!
//! Typed mapping from a field key to the strategies the view needs for it:
//! a text accessor (for the search filter) and a sort-key accessor.
//!
//! ## Why a Catalog?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Field Dispatch Strategy                              │
//! │                                                                         │
//! │  ❌ WRONG: switch on a string key per cell/comparator                  │
//! │     match column_key { "full_name" => ..., "email" => ..., ... }       │
//! │     (adding a field = a new conditional branch in N places)            │
//! │                                                                         │
//! │  ✅ CORRECT: declare each field once with its accessors                │
//! │     FieldSpec { key: "full_name", text: Some(..), sort_key: Some(..) } │
//! │     (adding a field = one new table entry)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A field is a **designated filter field** iff it has a `text` accessor,
//! and sortable iff it has a `sort_key` accessor.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Stable string key identifying one field of an entity (e.g. `full_name`).
pub type FieldKey = &'static str;

// =============================================================================
// Sort Value
// =============================================================================

/// A totally ordered value extracted from an entity for sorting.
///
/// ## Ordering Rules
/// - `Text` compares case-insensitively, falling back to case-sensitive
///   order so equal-ignoring-case values still order deterministically
/// - `Int`/`Date`/`Bool` compare naturally (`a - b` semantics)
/// - Absent values (`None` accessor results map to `Missing`) sort first
///
/// Variants never mix within one field; the cross-variant order exists only
/// so `Ord` is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    /// Value absent on this entity (e.g. vacant house has no start date).
    Missing,
    Bool(bool),
    Int(i64),
    Date(NaiveDate),
    Text(String),
}

impl SortValue {
    /// Builds a text sort value.
    pub fn text(s: impl Into<String>) -> Self {
        SortValue::Text(s.into())
    }

    /// Builds a sort value from an optional date, mapping `None` to
    /// [`SortValue::Missing`].
    pub fn opt_date(d: Option<NaiveDate>) -> Self {
        match d {
            Some(d) => SortValue::Date(d),
            None => SortValue::Missing,
        }
    }

    /// Rank used only when comparing across variants.
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Bool(_) => 1,
            SortValue::Int(_) => 2,
            SortValue::Date(_) => 3,
            SortValue::Text(_) => 4,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => {
                let folded = a.to_lowercase().cmp(&b.to_lowercase());
                if folded == Ordering::Equal {
                    a.cmp(b)
                } else {
                    folded
                }
            }
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// Field Spec
// =============================================================================

/// One field of an entity, declared once per screen.
///
/// ## Usage
/// ```rust
/// use kost_core::field::{FieldSpec, SortValue};
/// use kost_core::types::Category;
///
/// const NAME: FieldSpec<Category> = FieldSpec {
///     key: "name",
///     label: "Nama",
///     text: Some(|c: &Category| c.name.clone()),
///     sort_key: Some(|c: &Category| SortValue::text(c.name.clone())),
/// };
/// ```
pub struct FieldSpec<T> {
    /// Stable key, matching the API's snake_case field name.
    pub key: FieldKey,

    /// Column header shown by the rendering layer.
    pub label: &'static str,

    /// Text accessor; present iff this is a designated filter field.
    pub text: Option<fn(&T) -> String>,

    /// Sort-key accessor; present iff the column is sortable.
    pub sort_key: Option<fn(&T) -> SortValue>,
}

impl<T> FieldSpec<T> {
    /// Whether this field participates in text filtering.
    pub fn is_filterable(&self) -> bool {
        self.text.is_some()
    }

    /// Whether this field can drive the sort descriptor.
    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_order_is_case_insensitive_first() {
        let a = SortValue::text("budi");
        let b = SortValue::text("Citra");
        assert!(a < b); // 'b' < 'c' ignoring case, despite 'C' < 'b' in ASCII
    }

    #[test]
    fn test_missing_sorts_first() {
        let missing = SortValue::Missing;
        let date = SortValue::opt_date(NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(missing < date);
    }

    #[test]
    fn test_int_order() {
        assert!(SortValue::Int(-5) < SortValue::Int(3));
    }
}
