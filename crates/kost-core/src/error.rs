//! # Error Types
//!
//! View-logic errors for kost-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kost-core errors (this file)                                          │
//! │  └── ViewError        - Pipeline/configuration failures                │
//! │                                                                         │
//! │  kost-api errors (separate crate)                                      │
//! │  └── ApiError         - Fetch/Validation/Mutation/Transport            │
//! │                                                                         │
//! │  Flow: ViewError / ApiError → snapshot fields → rendering layer        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field key, page size, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// View configuration and pipeline errors.
///
/// These are programming or configuration mistakes, not runtime network
/// conditions; network conditions live in kost-api's `ApiError`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// A sort descriptor referenced a field the screen's catalog does not
    /// declare as sortable.
    #[error("field '{field}' is not sortable on this screen")]
    NotSortable { field: String },

    /// A field key does not exist in the screen's catalog at all.
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// Page size must be at least 1.
    #[error("invalid page size: {size}")]
    InvalidPageSize { size: usize },
}

impl ViewError {
    /// Creates a NotSortable error for a given field key.
    pub fn not_sortable(field: impl Into<String>) -> Self {
        ViewError::NotSortable {
            field: field.into(),
        }
    }

    /// Creates an UnknownField error for a given field key.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        ViewError::UnknownField {
            field: field.into(),
        }
    }
}

/// Convenience type alias for Results with ViewError.
pub type ViewResult<T> = Result<T, ViewError>;
