//! # Resource Routes
//!
//! Route descriptors for the six collections plus the typed remote
//! collection built on them.
//!
//! ## Route Catalog
//! ```text
//! ┌──────────────┬──────────────────┬────────────────┬──────────────┐
//! │ Screen       │ Path             │ Collection key │ Entity key   │
//! ├──────────────┼──────────────────┼────────────────┼──────────────┤
//! │ tenants      │ users            │ users          │ user         │
//! │ houses       │ houses           │ houses         │ house        │
//! │ payments     │ payments         │ payments       │ payment      │
//! │ spendings    │ spendings        │ spendings      │ spending     │
//! │ categories   │ categories       │ categories     │ category     │
//! │ occupancies  │ house-histories  │ houseHistories │ houseHistory │
//! └──────────────┴──────────────────┴────────────────┴──────────────┘
//! ```
//!
//! The envelope keys are the server's, camelCase and all; they are data
//! here, not branches.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::debug;

use crate::client::ApiClient;
use crate::envelope;
use crate::error::ApiResult;
use kost_core::EntityId;

// =============================================================================
// Route Descriptors
// =============================================================================

/// One REST resource: its path segment and envelope keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Path segment under `/api/`.
    pub path: &'static str,
    /// Key holding the array in a GET body.
    pub collection_key: &'static str,
    /// Key holding the entity in a create/update success body.
    pub entity_key: &'static str,
}

pub const TENANTS: Resource = Resource {
    path: "users",
    collection_key: "users",
    entity_key: "user",
};

pub const HOUSES: Resource = Resource {
    path: "houses",
    collection_key: "houses",
    entity_key: "house",
};

pub const PAYMENTS: Resource = Resource {
    path: "payments",
    collection_key: "payments",
    entity_key: "payment",
};

pub const SPENDINGS: Resource = Resource {
    path: "spendings",
    collection_key: "spendings",
    entity_key: "spending",
};

pub const CATEGORIES: Resource = Resource {
    path: "categories",
    collection_key: "categories",
    entity_key: "category",
};

pub const OCCUPANCIES: Resource = Resource {
    path: "house-histories",
    collection_key: "houseHistories",
    entity_key: "houseHistory",
};

// =============================================================================
// Typed Remote Collection
// =============================================================================

/// Typed CRUD access to one remote collection.
///
/// ## Usage
/// ```rust,ignore
/// let client = ApiClient::new("http://127.0.0.1:8000", token);
/// let categories = RestCollection::<Category>::new(client, CATEGORIES);
///
/// let all = categories.list().await?;
/// let created = categories.create(&json!({ "name": "listrik" })).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestCollection<T> {
    client: ApiClient,
    resource: Resource,
    _entity: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> RestCollection<T> {
    /// Binds a client to one resource's routes.
    pub fn new(client: ApiClient, resource: Resource) -> Self {
        RestCollection {
            client,
            resource,
            _entity: PhantomData,
        }
    }

    /// Fetches the full collection (`GET /api/<path>`). No server-side
    /// pagination: the view pipeline works over this fully hydrated set.
    pub async fn list(&self) -> ApiResult<Vec<T>> {
        let body = self.client.get(self.resource.path).await?;
        let items = envelope::parse_collection(body, self.resource.collection_key)?;
        debug!(resource = self.resource.path, "collection hydrated");
        Ok(items)
    }

    /// Creates an entity (`POST /api/<path>`), returning the
    /// server-returned entity — the source of truth for generated fields —
    /// plus the confirmation message for the notification area.
    pub async fn create(&self, payload: &Value) -> ApiResult<(T, String)> {
        let body = self.client.post(self.resource.path, payload).await?;
        let message = envelope::parse_message(&body);
        let entity = envelope::parse_entity(body, self.resource.entity_key)?;
        Ok((entity, message))
    }

    /// Updates an entity (`PUT /api/<path>/<id>`), returning the server's
    /// confirmation message. The submitted payload is the caller's source
    /// for the local merge (PUT bodies are keyed inconsistently upstream).
    pub async fn update(&self, id: EntityId, payload: &Value) -> ApiResult<String> {
        let path = format!("{}/{}", self.resource.path, id);
        let body = self.client.put(&path, payload).await?;
        Ok(envelope::parse_message(&body))
    }

    /// Deletes an entity (`DELETE /api/<path>/<id>`).
    pub async fn delete(&self, id: EntityId) -> ApiResult<String> {
        let path = format!("{}/{}", self.resource.path, id);
        let body = self.client.delete(&path).await?;
        Ok(envelope::parse_message(&body))
    }
}
