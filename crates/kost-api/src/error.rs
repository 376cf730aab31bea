//! # API Error Types
//!
//! The error taxonomy every remote operation normalizes into.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport error (reqwest::Error)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (this module) ← normalized at the source boundary            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Engine surfaces it: Fetch → empty collection, loading ends            │
//! │                      Validation → per-field messages, form stays open  │
//! │                      Mutation → one form-level banner message          │
//! │                                                                         │
//! │  The engine NEVER sees a raw transport exception.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Mapping
//! ```text
//! non-2xx on GET                      → ApiError::Fetch
//! envelope { error, errors: {..} }    → ApiError::Validation
//! envelope { error } without fields   → ApiError::Mutation
//! reqwest connect/read failure        → ApiError::Transport
//! body not matching expected shape    → ApiError::Decode
//! ```

use std::collections::HashMap;
use thiserror::Error;

/// Field-level validation messages, keyed by field name.
///
/// The API sends either a single string or an array of strings per field;
/// both normalize to a `Vec<String>`.
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Remote collection source errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Initial load failed (non-2xx or bad body). The collection stays
    /// empty; retry is an explicit user action, never automatic.
    #[error("fetching {resource} failed (status {status})")]
    Fetch { resource: String, status: u16 },

    /// Mutation rejected with per-field messages. The form retains user
    /// input so correction-and-resubmit is possible.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        fields: FieldErrors,
    },

    /// Mutation rejected with only a general message (no field
    /// attribution); surfaced as a single form-level banner.
    #[error("mutation failed: {message}")]
    Mutation { message: String },

    /// Connection/read failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected envelope shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Creates a Fetch error for a resource and HTTP status.
    pub fn fetch(resource: impl Into<String>, status: u16) -> Self {
        ApiError::Fetch {
            resource: resource.into(),
            status,
        }
    }

    /// Creates a Mutation error with a general message.
    pub fn mutation(message: impl Into<String>) -> Self {
        ApiError::Mutation {
            message: message.into(),
        }
    }

    /// Creates a Decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode(message.into())
    }

    /// Field-level messages, when this is a validation rejection.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

/// Raw transport failures are normalized here; nothing above this crate
/// handles reqwest types.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Result type for remote collection operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::fetch("users", 500);
        assert_eq!(err.to_string(), "fetching users failed (status 500)");

        let err = ApiError::mutation("Data tidak valid");
        assert_eq!(err.to_string(), "mutation failed: Data tidak valid");
    }

    #[test]
    fn test_field_errors_only_on_validation() {
        let mut fields = FieldErrors::new();
        fields.insert("name".to_string(), vec!["required".to_string()]);
        let err = ApiError::Validation {
            message: "invalid".to_string(),
            fields,
        };
        assert!(err.field_errors().unwrap().contains_key("name"));
        assert!(ApiError::mutation("x").field_errors().is_none());
    }
}
