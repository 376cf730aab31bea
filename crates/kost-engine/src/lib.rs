//! # Kost Engine
//!
//! The stateful layer of the admin console: one [`CollectionView`] per
//! screen, owning the hydrated collection and every piece of view state
//! derived from it.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         kost-engine                                     │
//! │                                                                         │
//! │   Rendering layer                                                       │
//! │        │  intents                    ▲  ViewSnapshot                    │
//! │        ▼                             │                                  │
//! │   ┌───────────────────────────────────────────┐                        │
//! │   │ CollectionView<T, S>       (view, mutate) │                        │
//! │   │   collection · filter · sort · page       │                        │
//! │   │   FormState · PendingMutation     (form)  │                        │
//! │   └───────────────┬───────────────────────────┘                        │
//! │                   │ CollectionSource<T>       (source)                  │
//! │         ┌─────────┴──────────┐                                         │
//! │         ▼                    ▼                                         │
//! │   RestCollection<T>    MemorySource<T>                                 │
//! │   (kost-api)           (testing)                                       │
//! │                                                                         │
//! │   Picker / LinkedPicker    (cascade) — borrow candidate data from      │
//! │   their views read-only, never mutate a collection                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The derivation pipeline itself (filter, sort, page arithmetic) is pure
//! and lives in `kost-core`; this crate owns state, async I/O at the
//! source seam, and mutation reconciliation.

pub mod cascade;
pub mod form;
pub mod mutate;
pub mod source;
pub mod testing;
pub mod view;

pub use cascade::{category_picker, tenant_house_link, tenant_picker, LinkedPicker, Picker};
pub use form::{FormMode, FormState, MutationKind, MutationStatus, PendingMutation};
pub use source::CollectionSource;
pub use testing::MemorySource;
pub use view::{CollectionView, LoadStatus, ViewSnapshot};
