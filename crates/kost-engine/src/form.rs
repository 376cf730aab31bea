//! # Form & Mutation State
//!
//! One modal form per screen, in create or edit mode, plus the transient
//! record of an in-flight mutation.
//!
//! ## Failure Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Submit Failure                                       │
//! │                                                                         │
//! │  submit ──► server rejects                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  • collection: untouched (nothing was applied optimistically)          │
//! │  • field errors: keyed by field name, shown inline                     │
//! │  • other errors: one form-level message (banner)                       │
//! │  • typed input: RETAINED — the form stays open so the user can         │
//! │    correct and resubmit                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use ts_rs::TS;

use kost_api::{ApiError, FieldErrors};
use kost_core::EntityId;

// =============================================================================
// Pending Mutation
// =============================================================================

/// What kind of mutation is (or was) in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Lifecycle of one submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MutationStatus {
    Pending,
    Succeeded,
    Failed,
}

/// A transient record of one in-flight create/update/delete.
///
/// Exists only for the duration of a submit cycle: destroyed on success
/// (the result is already merged into the collection) or left behind as
/// `Failed` so the snapshot can report what went wrong.
#[derive(Debug, Clone, Serialize)]
pub struct PendingMutation {
    pub kind: MutationKind,
    /// Target id; `None` for create (the server generates it).
    pub target: Option<EntityId>,
    pub payload: Value,
    pub status: MutationStatus,
}

impl PendingMutation {
    pub fn pending(kind: MutationKind, target: Option<EntityId>, payload: Value) -> Self {
        PendingMutation {
            kind,
            target,
            payload,
            status: MutationStatus::Pending,
        }
    }
}

// =============================================================================
// Form State
// =============================================================================

/// Whether the form creates a new entity or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase", tag = "mode", content = "id")]
#[ts(export)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

/// The create/edit modal's state: typed field values plus surfaced errors.
#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    mode: FormMode,
    open: bool,
    fields: Map<String, Value>,
    field_errors: FieldErrors,
    form_error: Option<String>,
}

impl FormState {
    /// A closed form (the screen's initial state).
    pub fn closed() -> Self {
        FormState {
            mode: FormMode::Create,
            open: false,
            fields: Map::new(),
            field_errors: FieldErrors::new(),
            form_error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current typed values (the mutation payload on submit).
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Opens an empty create form.
    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.open = true;
        self.fields = Map::new();
        self.clear_errors();
    }

    /// Opens an edit form pre-filled with the entity's current values.
    pub fn open_edit(&mut self, id: EntityId, current: Map<String, Value>) {
        self.mode = FormMode::Edit(id);
        self.open = true;
        self.fields = current;
        self.clear_errors();
    }

    /// Sets one typed field value; stale errors for it are cleared.
    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        self.field_errors.remove(&key);
        self.fields.insert(key, value);
    }

    /// Closes and resets after a successful submit.
    pub fn close_success(&mut self) {
        self.open = false;
        self.fields = Map::new();
        self.clear_errors();
    }

    /// Closes without submitting; typed input is discarded.
    pub fn cancel(&mut self) {
        self.open = false;
        self.fields = Map::new();
        self.clear_errors();
    }

    /// Applies a rejected submit: errors surface, input is RETAINED and
    /// the form stays open for correction-and-resubmit.
    pub fn apply_failure(&mut self, error: &ApiError) {
        self.clear_errors();
        match error {
            ApiError::Validation { message, fields } => {
                self.field_errors = fields.clone();
                self.form_error = Some(message.clone());
            }
            other => {
                self.form_error = Some(other.to_string());
            }
        }
    }

    fn clear_errors(&mut self) {
        self.field_errors.clear();
        self.form_error = None;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::closed()
    }
}
