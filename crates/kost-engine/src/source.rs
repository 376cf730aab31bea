//! # Collection Source Seam
//!
//! The trait boundary between the engine and whatever supplies entities:
//! the REST API in production, an in-memory store in tests. The engine
//! suspends only at these four calls; everything else is synchronous.
//!
//! No timeout or cancellation lives here: a call that never settles leaves
//! the view loading/pending until it does.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use kost_api::{ApiResult, RestCollection};
use kost_core::EntityId;

/// Remote operations over one collection of `T`.
///
/// ## Contract
/// - `load` returns the FULL collection; filtering/sorting/paging are
///   client-side over the hydrated set
/// - `create` returns the server's entity (the source of truth for
///   generated fields such as the id — the engine never synthesizes one)
/// - `update`/`delete` return the server's confirmation message; the
///   caller owns the local merge/removal
/// - every failure is already normalized into the `ApiError` taxonomy
#[async_trait]
pub trait CollectionSource<T>: Send + Sync {
    /// Fetches the full collection.
    async fn load(&self) -> ApiResult<Vec<T>>;

    /// Creates an entity from a JSON payload, returning the created entity
    /// and the server's confirmation message.
    async fn create(&self, payload: &Value) -> ApiResult<(T, String)>;

    /// Applies a partial update to the entity with `id`.
    async fn update(&self, id: EntityId, payload: &Value) -> ApiResult<String>;

    /// Deletes the entity with `id`.
    async fn delete(&self, id: EntityId) -> ApiResult<String>;
}

/// The production source: a typed REST collection.
#[async_trait]
impl<T> CollectionSource<T> for RestCollection<T>
where
    T: DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> ApiResult<Vec<T>> {
        RestCollection::list(self).await
    }

    async fn create(&self, payload: &Value) -> ApiResult<(T, String)> {
        RestCollection::create(self, payload).await
    }

    async fn update(&self, id: EntityId, payload: &Value) -> ApiResult<String> {
        RestCollection::update(self, id, payload).await
    }

    async fn delete(&self, id: EntityId) -> ApiResult<String> {
        RestCollection::delete(self, id).await
    }
}
