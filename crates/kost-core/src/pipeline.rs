//! # View Pipeline
//!
//! The one pipeline every screen repeats: filter → sort → paginate.
//!
//! ## Pipeline Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Derivation Order (fixed)                             │
//! │                                                                         │
//! │  Collection (raw fetch order)                                          │
//! │       │                                                                 │
//! │       ▼  filter: case-insensitive substring over designated fields     │
//! │  Filtered                                                              │
//! │       │                                                                 │
//! │       ▼  sort: stable, one descriptor, comparator sign per direction   │
//! │  Filtered + Sorted                                                     │
//! │       │                                                                 │
//! │       ▼  paginate: [(page-1)*size, page*size), short final page        │
//! │  Visible slice                                                         │
//! │                                                                         │
//! │  Page boundaries are computed over the filtered AND sorted set,        │
//! │  never the raw fetched set.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is a pure function of (collection, query, descriptor); no
//! derived state is cached anywhere else.

use crate::error::{ViewError, ViewResult};
use crate::field::{FieldKey, FieldSpec, SortValue};
use crate::filter::filter_indices;
use crate::sort::{sort_indices, SortDescriptor};

// =============================================================================
// View Config
// =============================================================================

/// Per-screen configuration: the field catalog plus the default sort.
///
/// One engine, configured per use — screens differ only in this value and
/// their entity type.
pub struct ViewConfig<T: 'static> {
    /// Screen name, used for logging only.
    pub screen: &'static str,

    /// The field catalog (filter/sort accessors, column labels).
    pub fields: &'static [FieldSpec<T>],

    /// Sort applied before the user picks one.
    pub default_sort: SortDescriptor,
}

impl<T> ViewConfig<T> {
    /// Looks up a field by key.
    pub fn field(&self, key: FieldKey) -> Option<&FieldSpec<T>> {
        self.fields.iter().find(|spec| spec.key == key)
    }

    /// Resolves the sort accessor for a descriptor.
    ///
    /// ## Errors
    /// - `UnknownField` when the key is not in the catalog
    /// - `NotSortable` when the field has no sort accessor
    pub fn sort_key_for(&self, descriptor: SortDescriptor) -> ViewResult<fn(&T) -> SortValue> {
        let spec = self
            .field(descriptor.field)
            .ok_or_else(|| ViewError::unknown_field(descriptor.field))?;
        spec.sort_key
            .ok_or_else(|| ViewError::not_sortable(descriptor.field))
    }

    /// Designated filter fields (those with a text accessor).
    pub fn filter_fields(&self) -> impl Iterator<Item = &FieldSpec<T>> {
        self.fields.iter().filter(|spec| spec.is_filterable())
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Runs filter then sort, returning indices into `items` in visible order.
///
/// Pagination is applied by the caller over the result (the page owner
/// needs the filtered length for clamping before it can slice).
pub fn derive_indices<T>(
    items: &[T],
    config: &ViewConfig<T>,
    query: &str,
    sort: SortDescriptor,
) -> ViewResult<Vec<usize>> {
    let sort_key = config.sort_key_for(sort)?;

    let mut indices = filter_indices(items, config.fields, query);
    sort_indices(items, &mut indices, sort_key, sort.direction);
    Ok(indices)
}
