//! # Domain Types
//!
//! Entities managed by the Kost Admin console, one per screen.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Tenant      │   │     House       │   │    Payment      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (server)    │   │  id (server)    │   │  id (server)    │       │
//! │  │  full_name      │   │  address        │   │  house_id (FK)  │       │
//! │  │  role/status    │   │  user_id (FK)   │   │  user_id (FK)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Spending     │   │    Category     │   │   Occupancy     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  category_id    │   │  name           │   │  house_id (FK)  │       │
//! │  │  amount         │   └─────────────────┘   │  user_id (FK)   │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries a server-generated integer `id`. The engine never
//! synthesizes one: a created entity enters the collection only as the
//! server returned it (the server is the source of truth for generated
//! fields).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Server-generated entity identifier.
pub type EntityId = i64;

/// A record with a stable unique identifier.
///
/// The view pipeline knows nothing about field semantics beyond this id
/// and whatever the screen's [`FieldSpec`](crate::field::FieldSpec) catalog
/// exposes.
pub trait Entity {
    /// Returns the server-assigned identifier.
    fn id(&self) -> EntityId;
}

// =============================================================================
// Embedded References
// =============================================================================

/// Slim tenant reference embedded in houses/occupancies by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TenantRef {
    pub id: EntityId,
    pub full_name: String,
}

/// Slim house reference embedded in occupancies by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HouseRef {
    pub id: EntityId,
    pub address: String,
}

// =============================================================================
// Tenant
// =============================================================================

/// A tenant (resource `users`).
///
/// ## Fields
/// - `role`: "admin" or "user"
/// - `status`: "kontrak" (contract) or "tetap" (permanent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tenant {
    pub id: EntityId,
    pub full_name: String,
    pub phone_number: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub is_married: bool,
    pub is_active: bool,
}

impl Entity for Tenant {
    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// House
// =============================================================================

/// A house unit.
///
/// `user_id` is null while the house is vacant; the API also embeds a slim
/// `user` reference when occupied so the screen can label rows without a
/// second fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct House {
    pub id: EntityId,
    pub address: String,
    pub status: String,
    pub user_id: Option<EntityId>,
    #[ts(type = "string | null")]
    pub start_date: Option<NaiveDate>,
    #[ts(type = "string | null")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TenantRef>,
}

impl Entity for House {
    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A monthly billing record for one house/tenant pair.
///
/// Fee amounts are whole rupiah as i64 (never floats). The API embeds slim
/// tenant/house refs so the screen can search by occupant name or address
/// without a join of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Payment {
    pub id: EntityId,
    pub house_id: EntityId,
    pub user_id: EntityId,
    #[ts(type = "string")]
    pub payment_date: NaiveDate,
    /// Iuran kebersihan (cleaning fee), rupiah.
    pub cleaning_fee: i64,
    /// Iuran satpam (security fee), rupiah.
    pub security_fee: i64,
    pub is_paid: bool,
    #[ts(type = "string | null")]
    pub paid_at: Option<NaiveDate>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TenantRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<HouseRef>,
}

impl Entity for Payment {
    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// Spending
// =============================================================================

/// An expense entry, attributed to a spending category.
///
/// The API embeds the category so rows can be searched by category name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Spending {
    pub id: EntityId,
    #[ts(type = "string")]
    pub spending_date: NaiveDate,
    pub category_id: EntityId,
    /// Whole rupiah.
    pub amount: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Entity for Spending {
    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// Category
// =============================================================================

/// A spending category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

impl Entity for Category {
    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// Occupancy
// =============================================================================

/// An occupancy history record (resource `house-histories`): which tenant
/// lived in which house over which date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Occupancy {
    pub id: EntityId,
    pub house_id: EntityId,
    pub user_id: EntityId,
    #[ts(type = "string | null")]
    pub start_date: Option<NaiveDate>,
    #[ts(type = "string | null")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TenantRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<HouseRef>,
}

impl Entity for Occupancy {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_deserializes_with_embedded_user() {
        let json = r#"{
            "id": 3,
            "address": "Jl. Melati No. 3",
            "status": "occupied",
            "user_id": 7,
            "start_date": "2024-01-01",
            "end_date": null,
            "user": { "id": 7, "full_name": "Budi Santoso" }
        }"#;

        let house: House = serde_json::from_str(json).unwrap();
        assert_eq!(house.id(), 3);
        assert_eq!(house.user.as_ref().unwrap().full_name, "Budi Santoso");
        assert_eq!(house.end_date, None);
    }

    #[test]
    fn test_house_deserializes_without_embedded_user() {
        let json = r#"{
            "id": 4,
            "address": "Jl. Melati No. 4",
            "status": "vacant",
            "user_id": null,
            "start_date": null,
            "end_date": null
        }"#;

        let house: House = serde_json::from_str(json).unwrap();
        assert!(house.user.is_none());
        assert!(house.user_id.is_none());
    }

    #[test]
    fn test_payment_round_trips() {
        let payment = Payment {
            id: 1,
            house_id: 3,
            user_id: 7,
            payment_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            cleaning_fee: 25_000,
            security_fee: 50_000,
            is_paid: false,
            paid_at: None,
            description: "Februari".to_string(),
            user: None,
            house: None,
        };

        let json = serde_json::to_string(&payment).unwrap();
        let back: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payment);
    }

    #[test]
    fn test_payment_deserializes_with_embedded_refs() {
        let json = r#"{
            "id": 2,
            "house_id": 3,
            "user_id": 7,
            "payment_date": "2024-03-01",
            "cleaning_fee": 25000,
            "security_fee": 50000,
            "is_paid": true,
            "paid_at": "2024-03-05",
            "description": "Maret",
            "user": { "id": 7, "full_name": "Budi Santoso" },
            "house": { "id": 3, "address": "Jl. Melati No. 3" }
        }"#;

        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.user.as_ref().unwrap().full_name, "Budi Santoso");
        assert_eq!(payment.house.as_ref().unwrap().address, "Jl. Melati No. 3");
    }
}
