//! # kost-core: Pure View Logic for Kost Admin
//!
//! This crate is the **heart** of the Kost Admin console. It contains the
//! collection-view logic every screen repeats, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kost Admin Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Rendering Layer (out of scope)                │   │
//! │  │    Table ──► Search box ──► Pagination ──► Create/Edit modal   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot / intents                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                kost-engine (Collection View Engine)             │   │
//! │  │    load, set_filter, set_sort, set_page, create/update/delete  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kost-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ pipeline  │  │   page    │  │  cascade  │  │   │
//! │  │   │  Tenant   │  │ filter →  │  │ PageState │  │ governed  │  │   │
//! │  │   │  House …  │  │ sort      │  │ clamping  │  │ selection │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kost-api (REST source)                       │   │
//! │  │          reqwest client, bearer auth, envelope parsing          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Tenant, House, Payment, Spending,
//!   Category, Occupancy)
//! - [`field`] - Typed field catalog: key → text/sort accessors
//! - [`filter`] / [`sort`] / [`page`] - The three pipeline stages
//! - [`pipeline`] - Filter → sort derivation + per-screen [`ViewConfig`]
//! - [`cascade`] - Governing/dependent selection state machine
//! - [`catalog`] - The six screens' configuration tables
//! - [`error`] - View errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: derived view state is a function of
//!    (collection, filter, sort, page) and nothing else — no caches
//! 2. **No I/O**: network access is FORBIDDEN here; kost-api owns it
//! 3. **Fixed order**: filter before sort, sort before paginate; page
//!    boundaries are computed over the filtered-and-sorted set
//! 4. **Config over branches**: screens differ by data (field tables),
//!    never by per-screen conditionals

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cascade;
pub mod catalog;
pub mod error;
pub mod field;
pub mod filter;
pub mod page;
pub mod pipeline;
pub mod sort;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kost_core::PageState` instead of
// `use kost_core::page::PageState`

pub use cascade::{Candidate, CascadeLink, MatchMode, SelectionPhase};
pub use error::{ViewError, ViewResult};
pub use field::{FieldKey, FieldSpec, SortValue};
pub use page::{PageState, DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
pub use pipeline::{derive_indices, ViewConfig};
pub use sort::{SortDescriptor, SortDirection};
pub use types::{
    Category, Entity, EntityId, House, HouseRef, Occupancy, Payment, Spending, Tenant, TenantRef,
};
