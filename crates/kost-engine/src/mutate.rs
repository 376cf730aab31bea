//! # Optimistic Mutation & Reconciliation
//!
//! Create/update/delete against the remote source, reconciled into the
//! local collection only after server confirmation (despite the name, no
//! pre-confirmation UI update ever occurs).
//!
//! ## Reconciliation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  create ── success ──► append the SERVER-RETURNED entity               │
//! │                        (the server owns generated fields; the engine   │
//! │                         never synthesizes an id)                        │
//! │                                                                         │
//! │  update ── success ──► shallow-merge the submitted patch over the      │
//! │                        previous value; untouched fields survive,       │
//! │                        every other entity is untouched                  │
//! │                                                                         │
//! │  delete ── success ──► remove by id; if the final page emptied, the    │
//! │                        page index rolls back into range                 │
//! │                                                                         │
//! │  any ──── failure ──► collection EXACTLY as before the call; errors    │
//! │                        surface through the form (field/form level)     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concurrent mutations targeting the SAME id are a caller error: nothing
//! here serializes them, and whichever response lands last wins
//! (last-write-wins is the only ordering guarantee).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::form::{FormMode, MutationKind, MutationStatus, PendingMutation};
use crate::source::CollectionSource;
use crate::view::CollectionView;
use kost_api::{ApiError, ApiResult};
use kost_core::{Entity, EntityId};

/// Shallow-merges a JSON patch over an entity: patch fields replace,
/// absent fields are preserved. The `id` is never patchable.
fn shallow_merge<T>(current: &T, patch: &Value) -> ApiResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut base =
        serde_json::to_value(current).map_err(|e| ApiError::decode(e.to_string()))?;
    let obj = base
        .as_object_mut()
        .ok_or_else(|| ApiError::decode("entity did not serialize to an object"))?;
    let patch_obj = patch
        .as_object()
        .ok_or_else(|| ApiError::decode("patch is not a JSON object"))?;

    for (key, value) in patch_obj {
        if key == "id" {
            continue;
        }
        obj.insert(key.clone(), value.clone());
    }

    serde_json::from_value(base).map_err(|e| ApiError::decode(e.to_string()))
}

impl<T, S> CollectionView<T, S>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
    S: CollectionSource<T>,
{
    // -------------------------------------------------------------------------
    // Form intents
    // -------------------------------------------------------------------------

    /// Opens an empty create form.
    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Opens the edit form pre-filled from the entity with `id`.
    /// Returns false (and does nothing) when no such entity exists.
    pub fn open_edit(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.collection().iter().find(|e| e.id() == id) else {
            return false;
        };
        let mut fields = match serde_json::to_value(entity) {
            Ok(Value::Object(map)) => map,
            _ => return false,
        };
        fields.remove("id"); // identity is the route, not the payload
        self.form.open_edit(id, fields);
        true
    }

    /// Sets one typed form field.
    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        self.form.set_field(key, value);
    }

    /// Closes the form, discarding typed input.
    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Submits the open form: create in `Create` mode, update in `Edit`.
    pub async fn submit(&mut self) -> ApiResult<()> {
        let payload = Value::Object(self.form.fields().clone());
        match self.form.mode() {
            FormMode::Create => self.create(payload).await,
            FormMode::Edit(id) => self.update(id, payload).await,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Creates an entity. One outbound call; on success the
    /// server-returned entity is appended exactly once.
    pub async fn create(&mut self, payload: Value) -> ApiResult<()> {
        self.pending = Some(PendingMutation::pending(
            MutationKind::Create,
            None,
            payload.clone(),
        ));

        match self.source().create(&payload).await {
            Ok((entity, message)) => {
                info!(screen = self.config().screen, id = entity.id(), "created");
                self.items_mut().push(entity);
                self.settle_success(message);
                Ok(())
            }
            Err(err) => Err(self.settle_failure(err)),
        }
    }

    /// Updates the entity with `id` by shallow-merging `patch` over its
    /// previous value after the server confirms.
    pub async fn update(&mut self, id: EntityId, patch: Value) -> ApiResult<()> {
        self.pending = Some(PendingMutation::pending(
            MutationKind::Update,
            Some(id),
            patch.clone(),
        ));

        match self.source().update(id, &patch).await {
            Ok(message) => {
                if let Some(pos) = self.collection().iter().position(|e| e.id() == id) {
                    match shallow_merge(&self.collection()[pos], &patch) {
                        Ok(merged) => self.items_mut()[pos] = merged,
                        Err(err) => return Err(self.settle_failure(err)),
                    }
                }
                info!(screen = self.config().screen, id, "updated");
                self.settle_success(message);
                Ok(())
            }
            Err(err) => Err(self.settle_failure(err)),
        }
    }

    /// Deletes the entity with `id`, rolling the page back if the final
    /// page emptied.
    pub async fn delete(&mut self, id: EntityId) -> ApiResult<()> {
        self.pending = Some(PendingMutation::pending(
            MutationKind::Delete,
            Some(id),
            Value::Null,
        ));

        match self.source().delete(id).await {
            Ok(message) => {
                self.items_mut().retain(|e| e.id() != id);
                self.reclamp_page();
                info!(screen = self.config().screen, id, "deleted");
                self.settle_success(message);
                Ok(())
            }
            Err(err) => Err(self.settle_failure(err)),
        }
    }

    // -------------------------------------------------------------------------
    // Settling
    // -------------------------------------------------------------------------

    /// Success: the pending record is destroyed (its result is already in
    /// the collection), the form closes, the confirmation surfaces.
    fn settle_success(&mut self, message: String) {
        self.pending = None;
        self.notice = Some(message);
        self.form.close_success();
    }

    /// Failure: collection untouched; errors surface through the form so
    /// the user can correct and resubmit.
    fn settle_failure(&mut self, err: ApiError) -> ApiError {
        warn!(screen = self.config().screen, %err, "mutation rejected");
        if let Some(pending) = self.pending.as_mut() {
            pending.status = MutationStatus::Failed;
        }
        self.notice = None;
        self.form.apply_failure(&err);
        err
    }
}
