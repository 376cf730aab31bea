//! # Screen Catalog
//!
//! The per-screen configuration tables. Six screens share one engine; they
//! differ only in entity type, these field tables, and their default sort.
//!
//! ## Screens
//! ```text
//! ┌──────────────┬──────────────────────────┬─────────────────────────────┐
//! │ Screen       │ Designated filter fields │ Default sort                │
//! ├──────────────┼──────────────────────────┼─────────────────────────────┤
//! │ tenants      │ full_name, email         │ full_name ascending         │
//! │ houses       │ address, occupant name   │ address ascending           │
//! │ payments     │ tenant name, address     │ payment_date ascending      │
//! │ spendings    │ category name            │ spending_date ascending     │
//! │ categories   │ name                     │ name ascending              │
//! │ occupancies  │ tenant name, address     │ full_name ascending         │
//! └──────────────┴──────────────────────────┴─────────────────────────────┘
//! ```
//!
//! Adding a column to a screen is one new `FieldSpec` entry here, never a
//! new conditional branch elsewhere.

use crate::cascade::Candidate;
use crate::field::{FieldSpec, SortValue};
use crate::pipeline::ViewConfig;
use crate::sort::SortDescriptor;
use crate::types::{Category, House, Occupancy, Payment, Spending, Tenant};

// =============================================================================
// Tenants (resource `users`)
// =============================================================================

pub static TENANT_FIELDS: &[FieldSpec<Tenant>] = &[
    FieldSpec {
        key: "full_name",
        label: "Nama Lengkap",
        text: Some(|t: &Tenant| t.full_name.clone()),
        sort_key: Some(|t: &Tenant| SortValue::text(t.full_name.clone())),
    },
    FieldSpec {
        key: "phone_number",
        label: "Nomor Telepon",
        text: None,
        sort_key: None,
    },
    FieldSpec {
        key: "username",
        label: "Username",
        text: None,
        sort_key: None,
    },
    FieldSpec {
        key: "email",
        label: "Email",
        text: Some(|t: &Tenant| t.email.clone()),
        sort_key: Some(|t: &Tenant| SortValue::text(t.email.clone())),
    },
    FieldSpec {
        key: "role",
        label: "Role",
        text: None,
        sort_key: Some(|t: &Tenant| SortValue::text(t.role.clone())),
    },
    FieldSpec {
        key: "status",
        label: "Status",
        text: None,
        sort_key: None,
    },
    FieldSpec {
        key: "is_married",
        label: "Menikah",
        text: None,
        sort_key: None,
    },
];

pub static TENANTS: ViewConfig<Tenant> = ViewConfig {
    screen: "tenants",
    fields: TENANT_FIELDS,
    default_sort: SortDescriptor::ascending("full_name"),
};

// =============================================================================
// Houses
// =============================================================================

pub static HOUSE_FIELDS: &[FieldSpec<House>] = &[
    FieldSpec {
        key: "address",
        label: "Alamat",
        text: Some(|h: &House| h.address.clone()),
        sort_key: Some(|h: &House| SortValue::text(h.address.clone())),
    },
    // Searches reach the occupant through the embedded ref; vacant houses
    // contribute an empty string and never match.
    FieldSpec {
        key: "full_name",
        label: "Nama Penghuni",
        text: Some(|h: &House| {
            h.user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default()
        }),
        sort_key: None,
    },
    FieldSpec {
        key: "status",
        label: "Status",
        text: None,
        sort_key: Some(|h: &House| SortValue::text(h.status.clone())),
    },
    FieldSpec {
        key: "start_date",
        label: "Tanggal Masuk",
        text: None,
        sort_key: Some(|h: &House| SortValue::opt_date(h.start_date)),
    },
    FieldSpec {
        key: "end_date",
        label: "Tanggal Keluar",
        text: None,
        sort_key: Some(|h: &House| SortValue::opt_date(h.end_date)),
    },
];

pub static HOUSES: ViewConfig<House> = ViewConfig {
    screen: "houses",
    fields: HOUSE_FIELDS,
    default_sort: SortDescriptor::ascending("address"),
};

// =============================================================================
// Payments
// =============================================================================

// The search box matches the embedded tenant/house refs, not the free-text
// description.

pub static PAYMENT_FIELDS: &[FieldSpec<Payment>] = &[
    FieldSpec {
        key: "full_name",
        label: "Nama Penghuni",
        text: Some(|p: &Payment| {
            p.user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default()
        }),
        sort_key: None,
    },
    FieldSpec {
        key: "address",
        label: "Alamat Rumah",
        text: Some(|p: &Payment| {
            p.house.as_ref().map(|h| h.address.clone()).unwrap_or_default()
        }),
        sort_key: None,
    },
    FieldSpec {
        key: "payment_date",
        label: "Tanggal Tagihan",
        text: None,
        sort_key: Some(|p: &Payment| SortValue::Date(p.payment_date)),
    },
    FieldSpec {
        key: "cleaning_fee",
        label: "Iuran Kebersihan",
        text: None,
        sort_key: Some(|p: &Payment| SortValue::Int(p.cleaning_fee)),
    },
    FieldSpec {
        key: "security_fee",
        label: "Iuran Satpam",
        text: None,
        sort_key: Some(|p: &Payment| SortValue::Int(p.security_fee)),
    },
    FieldSpec {
        key: "is_paid",
        label: "Lunas",
        text: None,
        sort_key: Some(|p: &Payment| SortValue::Bool(p.is_paid)),
    },
    FieldSpec {
        key: "description",
        label: "Keterangan",
        text: None,
        sort_key: None,
    },
];

pub static PAYMENTS: ViewConfig<Payment> = ViewConfig {
    screen: "payments",
    fields: PAYMENT_FIELDS,
    default_sort: SortDescriptor::ascending("payment_date"),
};

// =============================================================================
// Spendings
// =============================================================================

pub static SPENDING_FIELDS: &[FieldSpec<Spending>] = &[
    FieldSpec {
        key: "spending_date",
        label: "Tanggal",
        text: None,
        sort_key: Some(|s: &Spending| SortValue::Date(s.spending_date)),
    },
    FieldSpec {
        key: "amount",
        label: "Jumlah",
        text: None,
        sort_key: Some(|s: &Spending| SortValue::Int(s.amount)),
    },
    FieldSpec {
        key: "category",
        label: "Kategori",
        text: Some(|s: &Spending| {
            s.category.as_ref().map(|c| c.name.clone()).unwrap_or_default()
        }),
        sort_key: None,
    },
    FieldSpec {
        key: "description",
        label: "Keterangan",
        text: None,
        sort_key: None,
    },
];

pub static SPENDINGS: ViewConfig<Spending> = ViewConfig {
    screen: "spendings",
    fields: SPENDING_FIELDS,
    default_sort: SortDescriptor::ascending("spending_date"),
};

// =============================================================================
// Categories
// =============================================================================

pub static CATEGORY_FIELDS: &[FieldSpec<Category>] = &[FieldSpec {
    key: "name",
    label: "Nama Kategori",
    text: Some(|c: &Category| c.name.clone()),
    sort_key: Some(|c: &Category| SortValue::text(c.name.clone())),
}];

pub static CATEGORIES: ViewConfig<Category> = ViewConfig {
    screen: "categories",
    fields: CATEGORY_FIELDS,
    default_sort: SortDescriptor::ascending("name"),
};

// =============================================================================
// Occupancies (resource `house-histories`)
// =============================================================================

// Filter/sort run over the embedded refs so the screen can search by tenant
// name or address without a join of its own.

pub static OCCUPANCY_FIELDS: &[FieldSpec<Occupancy>] = &[
    FieldSpec {
        key: "full_name",
        label: "Nama Penghuni",
        text: Some(|o: &Occupancy| {
            o.user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default()
        }),
        sort_key: Some(|o: &Occupancy| {
            SortValue::text(o.user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default())
        }),
    },
    FieldSpec {
        key: "address",
        label: "Alamat Rumah",
        text: Some(|o: &Occupancy| {
            o.house.as_ref().map(|h| h.address.clone()).unwrap_or_default()
        }),
        sort_key: None,
    },
    FieldSpec {
        key: "start_date",
        label: "Tanggal Masuk",
        text: None,
        sort_key: Some(|o: &Occupancy| SortValue::opt_date(o.start_date)),
    },
    FieldSpec {
        key: "end_date",
        label: "Tanggal Keluar",
        text: None,
        sort_key: Some(|o: &Occupancy| SortValue::opt_date(o.end_date)),
    },
];

pub static OCCUPANCIES: ViewConfig<Occupancy> = ViewConfig {
    screen: "occupancies",
    fields: OCCUPANCY_FIELDS,
    default_sort: SortDescriptor::ascending("full_name"),
};

// =============================================================================
// Candidate Projections
// =============================================================================
// How each entity appears inside an autocomplete list. The house projection
// carries its occupant id as the cascade link (tenant governs house).

/// Tenant as a governing candidate (labelled by full name).
pub fn tenant_candidate(t: &Tenant) -> Candidate {
    Candidate::new(t.id, t.full_name.clone())
}

/// House as a dependent candidate, linked to its occupant.
pub fn house_candidate(h: &House) -> Candidate {
    Candidate {
        id: h.id,
        label: h.address.clone(),
        link: h.user_id,
    }
}

/// Category as a plain (unlinked) candidate.
pub fn category_candidate(c: &Category) -> Candidate {
    Candidate::new(c.id, c.name.clone())
}
