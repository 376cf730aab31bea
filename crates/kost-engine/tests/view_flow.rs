//! End-to-end flows through one screen's view: hydrate, filter, sort,
//! paginate, mutate, all over the in-memory source.

use chrono::NaiveDate;
use serde_json::json;

use kost_api::ApiError;
use kost_core::{
    catalog, Category, House, HouseRef, Payment, SortDescriptor, Spending, Tenant, TenantRef,
};
use kost_engine::{CollectionView, LoadStatus, MemorySource};

fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
    }
}

fn tenant(id: i64, full_name: &str, email: &str) -> Tenant {
    Tenant {
        id,
        full_name: full_name.to_string(),
        phone_number: "0812".to_string(),
        username: full_name.to_lowercase().replace(' ', "."),
        email: email.to_string(),
        role: "user".to_string(),
        status: "tetap".to_string(),
        is_married: false,
        is_active: true,
    }
}

/// Twelve categories named so name order equals id order.
async fn category_view(count: i64) -> CollectionView<Category, MemorySource<Category>> {
    let seed = (1..=count)
        .map(|i| category(i, &format!("kategori-{i:02}")))
        .collect();
    let mut view = CollectionView::new(MemorySource::new(seed), &catalog::CATEGORIES)
        .expect("default sort is sortable");
    view.load().await;
    assert_eq!(view.status(), LoadStatus::Ready);
    view
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn test_pages_partition_the_sorted_filtered_set() {
    let mut view = category_view(12).await;

    let mut seen = Vec::new();
    let mut sizes = Vec::new();
    for page in 1..=3 {
        view.set_page(page);
        let snap = view.snapshot();
        assert_eq!(snap.page, page);
        sizes.push(snap.items.len());
        seen.extend(snap.items.iter().map(|c| c.id));
    }

    // Short final page, no overlap, union equals the whole collection in
    // sorted order.
    assert_eq!(sizes, vec![5, 5, 2]);
    assert_eq!(seen, (1..=12).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_page_navigation_noops_at_the_boundaries() {
    let mut view = category_view(12).await;

    view.previous_page();
    assert_eq!(view.snapshot().page, 1);

    view.set_page(3);
    view.next_page();
    assert_eq!(view.snapshot().page, 3);

    view.set_page(99); // clamped
    assert_eq!(view.snapshot().page, 3);
}

#[tokio::test]
async fn test_changing_page_size_returns_to_page_one() {
    let mut view = category_view(12).await;
    view.set_page(3);

    view.set_page_size(10).unwrap();
    let snap = view.snapshot();
    assert_eq!(snap.page, 1);
    assert_eq!(snap.page_count, 2);

    assert!(view.set_page_size(0).is_err());
}

// =============================================================================
// Filter
// =============================================================================

#[tokio::test]
async fn test_filter_narrows_and_resets_the_page() {
    let mut view = category_view(12).await;
    view.set_page(3);

    // matches kategori-10, -11 and -12
    view.set_filter("kategori-1");
    let snap = view.snapshot();
    assert_eq!(snap.page, 1);
    assert_eq!(snap.filtered_total, 3);
    assert_eq!(snap.total, 12); // raw collection untouched
    assert_eq!(snap.page_count, 1);
}

#[tokio::test]
async fn test_setting_the_same_filter_twice_is_idempotent() {
    let mut view = category_view(12).await;
    view.set_filter("kategori-0");
    let first = view.snapshot();
    view.set_filter("kategori-0");
    let second = view.snapshot();

    assert_eq!(first.items, second.items);
    assert_eq!(first.page, second.page);
    assert_eq!(first.filtered_total, second.filtered_total);
}

#[tokio::test]
async fn test_clearing_the_filter_restores_the_full_set() {
    let mut view = category_view(12).await;
    view.set_filter("kategori-01");
    view.clear_filter();
    assert_eq!(view.snapshot().filtered_total, 12);
}

#[tokio::test]
async fn test_filter_is_case_insensitive() {
    let mut view = category_view(3).await;
    view.set_filter("KATEGORI-02");
    assert_eq!(view.snapshot().filtered_total, 1);
}

fn payment(id: i64, tenant: (i64, &str), house: (i64, &str)) -> Payment {
    Payment {
        id,
        house_id: house.0,
        user_id: tenant.0,
        payment_date: NaiveDate::from_ymd_opt(2024, 1, id as u32).unwrap(),
        cleaning_fee: 25_000,
        security_fee: 50_000,
        is_paid: false,
        paid_at: None,
        description: format!("tagihan bulan {id}"),
        user: Some(TenantRef {
            id: tenant.0,
            full_name: tenant.1.to_string(),
        }),
        house: Some(HouseRef {
            id: house.0,
            address: house.1.to_string(),
        }),
    }
}

#[tokio::test]
async fn test_payments_filter_on_tenant_name_and_house_address() {
    let seed = vec![
        payment(1, (7, "Budi Santoso"), (3, "Jl. Melati No. 1")),
        payment(2, (8, "Citra Dewi"), (4, "Jl. Anggrek No. 5")),
        payment(3, (7, "Budi Santoso"), (5, "Jl. Melati No. 2")),
    ];
    let mut view = CollectionView::new(MemorySource::new(seed), &catalog::PAYMENTS).unwrap();
    view.load().await;

    view.set_filter("budi");
    assert_eq!(view.snapshot().filtered_total, 2);

    view.set_filter("anggrek");
    assert_eq!(view.snapshot().filtered_total, 1);

    // The description is not a designated filter field on this screen
    view.set_filter("tagihan");
    assert_eq!(view.snapshot().filtered_total, 0);
}

#[tokio::test]
async fn test_spendings_filter_on_category_name() {
    let spending = |id: i64, category: &str| Spending {
        id,
        spending_date: NaiveDate::from_ymd_opt(2024, 1, id as u32).unwrap(),
        category_id: id,
        amount: 100_000,
        description: "belanja bulanan".to_string(),
        category: Some(Category {
            id,
            name: category.to_string(),
        }),
    };
    let seed = vec![
        spending(1, "listrik"),
        spending(2, "air"),
        spending(3, "listrik tambahan"),
    ];
    let mut view = CollectionView::new(MemorySource::new(seed), &catalog::SPENDINGS).unwrap();
    view.load().await;

    view.set_filter("listrik");
    assert_eq!(view.snapshot().filtered_total, 2);

    view.set_filter("belanja");
    assert_eq!(view.snapshot().filtered_total, 0);
}

#[tokio::test]
async fn test_houses_filter_on_address_or_occupant_name() {
    let house = |id: i64, address: &str, occupant: Option<(i64, &str)>| House {
        id,
        address: address.to_string(),
        status: if occupant.is_some() { "dihuni" } else { "kosong" }.to_string(),
        user_id: occupant.map(|(oid, _)| oid),
        start_date: None,
        end_date: None,
        user: occupant.map(|(oid, name)| TenantRef {
            id: oid,
            full_name: name.to_string(),
        }),
    };
    let seed = vec![
        house(1, "Jl. Melati No. 1", Some((7, "Budi Santoso"))),
        house(2, "Jl. Melati No. 2", None),
        house(3, "Jl. Anggrek No. 5", Some((8, "Citra Dewi"))),
    ];
    let mut view = CollectionView::new(MemorySource::new(seed), &catalog::HOUSES).unwrap();
    view.load().await;

    view.set_filter("budi");
    assert_eq!(view.snapshot().filtered_total, 1);

    // Address still matches, vacant houses included
    view.set_filter("melati");
    assert_eq!(view.snapshot().filtered_total, 2);
}

// =============================================================================
// Sort
// =============================================================================

#[tokio::test]
async fn test_descending_sort_reverses_the_visible_order() {
    let mut view = category_view(12).await;
    view.set_sort(SortDescriptor::descending("name")).unwrap();

    let snap = view.snapshot();
    let ids: Vec<i64> = snap.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![12, 11, 10, 9, 8]);
}

#[tokio::test]
async fn test_unsortable_field_is_rejected_and_previous_sort_kept() {
    let mut view = category_view(5).await;
    assert!(view.set_sort(SortDescriptor::ascending("nope")).is_err());

    let ids: Vec<i64> = view.snapshot().items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Load
// =============================================================================

#[tokio::test]
async fn test_failed_load_leaves_an_empty_collection() {
    let source: MemorySource<Category> = MemorySource::new(vec![category(1, "air")]);
    source.push_failure(ApiError::fetch("categories", 500));

    let mut view = CollectionView::new(source, &catalog::CATEGORIES).unwrap();
    view.load().await;

    assert_eq!(view.status(), LoadStatus::Failed);
    assert!(view.snapshot().items.is_empty());

    // Explicit retry hydrates
    view.load().await;
    assert_eq!(view.status(), LoadStatus::Ready);
    assert_eq!(view.snapshot().total, 1);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_appends_the_server_entity_exactly_once() {
    let mut view = category_view(3).await;

    view.open_create();
    view.set_field("name", json!("wifi"));
    view.submit().await.unwrap();

    let snap = view.snapshot();
    assert_eq!(snap.total, 4);
    assert!(!snap.form_open);
    assert_eq!(snap.notice.as_deref(), Some("created"));
    // Server-assigned id, present exactly once
    let wifi: Vec<&Category> = view
        .collection()
        .iter()
        .filter(|c| c.name == "wifi")
        .collect();
    assert_eq!(wifi.len(), 1);
    assert_eq!(wifi[0].id, 4);
}

#[tokio::test]
async fn test_rejected_create_surfaces_field_errors_and_keeps_input() {
    let mut view = category_view(3).await;
    view.source().push_failure(ApiError::Validation {
        message: "Data tidak valid".to_string(),
        fields: [("name".to_string(), vec!["required".to_string()])]
            .into_iter()
            .collect(),
    });

    view.open_create();
    view.set_field("name", json!(""));
    assert!(view.submit().await.is_err());

    let snap = view.snapshot();
    assert_eq!(snap.total, 3); // collection exactly as before
    assert!(snap.form_open); // correction-and-resubmit
    assert_eq!(snap.field_errors["name"], vec!["required"]);
    assert_eq!(snap.form_error.as_deref(), Some("Data tidak valid"));
    assert_eq!(view.form().fields()["name"], json!(""));

    // Corrected resubmit succeeds and clears the errors
    view.set_field("name", json!("wifi"));
    view.submit().await.unwrap();
    assert_eq!(view.snapshot().total, 4);
    assert!(view.snapshot().field_errors.is_empty());
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_merges_the_patch_and_touches_nothing_else() {
    let seed = vec![
        tenant(1, "Budi Santoso", "budi@kost.id"),
        tenant(2, "Citra Dewi", "citra@kost.id"),
    ];
    let untouched_before = serde_json::to_value(&seed[1]).unwrap();

    let mut view = CollectionView::new(MemorySource::new(seed), &catalog::TENANTS).unwrap();
    view.load().await;

    view.update(1, json!({ "email": "budi@baru.id" })).await.unwrap();

    let budi = view.collection().iter().find(|t| t.id == 1).unwrap();
    assert_eq!(budi.email, "budi@baru.id");
    assert_eq!(budi.full_name, "Budi Santoso"); // unpatched field preserved

    let citra = view.collection().iter().find(|t| t.id == 2).unwrap();
    assert_eq!(serde_json::to_value(citra).unwrap(), untouched_before);
}

#[tokio::test]
async fn test_edit_form_prefills_from_the_current_entity() {
    let mut view = CollectionView::new(
        MemorySource::new(vec![tenant(1, "Budi Santoso", "budi@kost.id")]),
        &catalog::TENANTS,
    )
    .unwrap();
    view.load().await;

    assert!(view.open_edit(1));
    assert_eq!(view.form().fields()["full_name"], json!("Budi Santoso"));
    assert!(!view.form().fields().contains_key("id"));

    assert!(!view.open_edit(99));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_removes_exactly_one_entity() {
    let mut view = category_view(12).await;
    view.delete(7).await.unwrap();

    let snap = view.snapshot();
    assert_eq!(snap.total, 11);
    assert!(view.collection().iter().all(|c| c.id != 7));
    assert_eq!(snap.notice.as_deref(), Some("deleted"));
}

#[tokio::test]
async fn test_deleting_the_final_pages_only_row_rolls_the_page_back() {
    let mut view = category_view(11).await; // pages [5, 5, 1]
    view.set_page(3);

    view.delete(11).await.unwrap();

    let snap = view.snapshot();
    assert_eq!(snap.page, 2);
    assert_eq!(snap.items.len(), 5);
}

#[tokio::test]
async fn test_rejected_delete_leaves_the_collection_intact() {
    let mut view = category_view(5).await;
    view.source()
        .push_failure(ApiError::mutation("Kategori masih dipakai"));

    assert!(view.delete(3).await.is_err());
    assert_eq!(view.snapshot().total, 5);
}
