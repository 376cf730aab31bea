//! # kost-api: REST Collection Source
//!
//! The Remote Collection Source for Kost Admin: typed CRUD over the
//! billing API's JSON envelopes, with every transport and envelope failure
//! normalized into the [`ApiError`] taxonomy before it leaves this crate.
//!
//! ## Request Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  GET    /api/users           Authorization: Bearer <token>             │
//! │  POST   /api/users           Accept: application/json                  │
//! │  PUT    /api/users/<id>      Content-Type: application/json            │
//! │  DELETE /api/users/<id>                                                │
//! │                                                                         │
//! │  Success: { users: [..] } / { message, user: {..} } / { message }      │
//! │  Failure: { error: true, message, errors?: { field: [msg] } }          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`client`] - The bearer-authenticated JSON client
//! - [`envelope`] - Envelope parsing and error normalization
//! - [`resource`] - Route descriptors + typed [`RestCollection`]
//! - [`error`] - The Fetch/Validation/Mutation/Transport/Decode taxonomy

pub mod client;
pub mod envelope;
pub mod error;
pub mod resource;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, FieldErrors};
pub use resource::{
    Resource, RestCollection, CATEGORIES, HOUSES, OCCUPANCIES, PAYMENTS, SPENDINGS, TENANTS,
};
