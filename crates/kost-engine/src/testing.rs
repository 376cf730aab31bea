//! # In-Memory Source
//!
//! A [`CollectionSource`] over a `Mutex<Vec<T>>`, for exercising the engine
//! without a server. Supports the same contract as the REST source:
//! server-generated ids on create, confirmation messages, and injectable
//! failures (queued, consumed by the next call).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::source::CollectionSource;
use kost_api::{ApiError, ApiResult};
use kost_core::{Entity, EntityId};

struct Inner<T> {
    items: Vec<T>,
    next_id: EntityId,
    failures: VecDeque<ApiError>,
}

/// An in-memory collection acting as the remote side.
pub struct MemorySource<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Entity + Clone> MemorySource<T> {
    /// Seeds the source; generated ids start above the seeded maximum.
    pub fn new(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Entity::id).max().unwrap_or(0) + 1;
        MemorySource {
            inner: Mutex::new(Inner {
                items,
                next_id,
                failures: VecDeque::new(),
            }),
        }
    }

    /// Queues a failure; the NEXT call (whichever operation it is) returns
    /// it instead of touching the store.
    pub fn push_failure(&self, error: ApiError) {
        self.inner.lock().unwrap().failures.push_back(error);
    }

    /// The store's current contents, in insertion order.
    pub fn contents(&self) -> Vec<T> {
        self.inner.lock().unwrap().items.clone()
    }
}

#[async_trait]
impl<T> CollectionSource<T> for MemorySource<T>
where
    T: Entity + Clone + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> ApiResult<Vec<T>> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.failures.pop_front() {
            return Err(err);
        }
        Ok(inner.items.clone())
    }

    async fn create(&self, payload: &Value) -> ApiResult<(T, String)> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.failures.pop_front() {
            return Err(err);
        }

        let mut body = payload
            .as_object()
            .cloned()
            .ok_or_else(|| ApiError::decode("payload is not a JSON object"))?;
        body.insert("id".to_string(), Value::from(inner.next_id));
        let entity: T = serde_json::from_value(Value::Object(body))
            .map_err(|e| ApiError::decode(e.to_string()))?;

        inner.next_id += 1;
        inner.items.push(entity.clone());
        Ok((entity, "created".to_string()))
    }

    async fn update(&self, id: EntityId, _payload: &Value) -> ApiResult<String> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.failures.pop_front() {
            return Err(err);
        }
        if inner.items.iter().any(|e| e.id() == id) {
            Ok("updated".to_string())
        } else {
            Err(ApiError::mutation(format!("no entity with id {id}")))
        }
    }

    async fn delete(&self, id: EntityId) -> ApiResult<String> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.failures.pop_front() {
            return Err(err);
        }
        let before = inner.items.len();
        inner.items.retain(|e| e.id() != id);
        if inner.items.len() == before {
            return Err(ApiError::mutation(format!("no entity with id {id}")));
        }
        Ok("deleted".to_string())
    }
}
