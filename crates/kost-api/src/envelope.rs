//! # Response Envelopes
//!
//! The billing API wraps every response in a small JSON envelope:
//!
//! ```text
//! GET    /api/users        → { "users": [ ... ] }
//! POST   /api/users        → { "message": "...", "user": { ... } }
//!                          or { "error": true, "message": "...",
//!                               "errors": { "email": ["required"] } }
//! PUT    /api/users/7      → same shapes as POST
//! DELETE /api/users/7      → { "message": "..." } or { "error": "..." }
//! ```
//!
//! This module turns those shapes into typed values or an [`ApiError`].
//! Quirks handled here so callers never see them:
//! - `error` is sometimes a boolean flag, sometimes the message itself
//! - per-field messages are sometimes a string, sometimes an array

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, FieldErrors};

/// Whether the envelope signals failure.
///
/// `{"error": true}`, `{"error": "msg"}` and `{"error": {...}}` all count;
/// `{"error": false}` and an absent key do not.
pub fn is_error(body: &Value) -> bool {
    match body.get("error") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => true,
    }
}

/// Normalizes one field's messages: a bare string becomes a one-element
/// list, an array keeps its string elements.
fn field_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Converts a failure envelope into the taxonomy: `Validation` when
/// per-field messages are present, `Mutation` otherwise.
pub fn parse_error(body: &Value) -> ApiError {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .unwrap_or("request rejected")
        .to_string();

    let fields: FieldErrors = body
        .get("errors")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(field, msgs)| (field.clone(), field_messages(msgs)))
                .collect()
        })
        .unwrap_or_default();

    if fields.is_empty() {
        ApiError::Mutation { message }
    } else {
        ApiError::Validation { message, fields }
    }
}

/// Extracts the collection array under `collection_key` from a GET body.
pub fn parse_collection<T: DeserializeOwned>(body: Value, collection_key: &str) -> ApiResult<Vec<T>> {
    let items = body
        .get(collection_key)
        .cloned()
        .ok_or_else(|| ApiError::decode(format!("missing '{collection_key}' key")))?;
    serde_json::from_value(items).map_err(|e| ApiError::decode(e.to_string()))
}

/// Extracts the created/updated entity under `entity_key` from a mutation
/// success body.
pub fn parse_entity<T: DeserializeOwned>(body: Value, entity_key: &str) -> ApiResult<T> {
    let entity = body
        .get(entity_key)
        .cloned()
        .ok_or_else(|| ApiError::decode(format!("missing '{entity_key}' key")))?;
    serde_json::from_value(entity).map_err(|e| ApiError::decode(e.to_string()))
}

/// Extracts the confirmation message from a mutation success body.
pub fn parse_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or("ok")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kost_core::Category;
    use serde_json::json;

    #[test]
    fn test_success_body_is_not_error() {
        assert!(!is_error(&json!({ "users": [] })));
        assert!(!is_error(&json!({ "error": false, "message": "ok" })));
    }

    #[test]
    fn test_error_flag_and_error_string_both_count() {
        assert!(is_error(&json!({ "error": true, "message": "bad" })));
        assert!(is_error(&json!({ "error": "bad" })));
    }

    #[test]
    fn test_validation_error_with_array_messages() {
        let body = json!({
            "error": true,
            "message": "Data tidak valid",
            "errors": { "name": ["required"] }
        });
        let err = parse_error(&body);
        let fields = err.field_errors().expect("should be validation");
        assert_eq!(fields["name"], vec!["required"]);
    }

    #[test]
    fn test_validation_error_with_string_message() {
        let body = json!({
            "error": true,
            "message": "Data tidak valid",
            "errors": { "email": "must be a valid email" }
        });
        let err = parse_error(&body);
        assert_eq!(
            err.field_errors().unwrap()["email"],
            vec!["must be a valid email"]
        );
    }

    #[test]
    fn test_error_without_fields_is_mutation() {
        let body = json!({ "error": "Kategori masih dipakai" });
        let err = parse_error(&body);
        assert!(err.field_errors().is_none());
        assert_eq!(err.to_string(), "mutation failed: Kategori masih dipakai");
    }

    #[test]
    fn test_parse_collection() {
        let body = json!({ "categories": [ { "id": 1, "name": "listrik" } ] });
        let items: Vec<Category> = parse_collection(body, "categories").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "listrik");
    }

    #[test]
    fn test_parse_collection_missing_key_is_decode_error() {
        let body = json!({ "wrong": [] });
        let err = parse_collection::<Category>(body, "categories").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_parse_entity() {
        let body = json!({ "message": "ok", "category": { "id": 9, "name": "air" } });
        let cat: Category = parse_entity(body, "category").unwrap();
        assert_eq!(cat.id, 9);
    }

    #[test]
    fn test_parse_message_defaults() {
        assert_eq!(parse_message(&json!({ "message": "Terhapus" })), "Terhapus");
        assert_eq!(parse_message(&json!({})), "ok");
    }
}
