//! # Filter Pipeline
//!
//! Case-insensitive substring matching over a screen's designated filter
//! fields. An entity matches when **any** designated field contains the
//! query; the empty query matches everything (pass-through).
//!
//! Filtering always runs before sorting and pagination, so page boundaries
//! are computed over the filtered set, never the raw fetched set.

use crate::field::FieldSpec;

/// Returns true when `haystack` contains `needle` ignoring ASCII-irrelevant
/// case (both sides lowercased, as the search box behaves).
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether one entity matches the query under the given field catalog.
///
/// ## Matching Policy
/// - empty query → always true
/// - otherwise → true iff any designated field's text contains the query
///   as a case-insensitive substring
pub fn matches<T>(entity: &T, fields: &[FieldSpec<T>], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    fields
        .iter()
        .filter_map(|spec| spec.text)
        .any(|accessor| contains_ignore_case(&accessor(entity), query))
}

/// Filters a collection down to the indices of matching entities.
///
/// Indices (rather than clones) keep the pipeline allocation-light and
/// preserve the pre-sort relative order the stability guarantee needs.
pub fn filter_indices<T>(items: &[T], fields: &[FieldSpec<T>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    items
        .iter()
        .enumerate()
        .filter(|&(_, item)| matches(item, fields, query))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SortValue;
    use crate::types::Tenant;

    fn tenant(id: i64, full_name: &str, email: &str) -> Tenant {
        Tenant {
            id,
            full_name: full_name.to_string(),
            phone_number: "0812".to_string(),
            username: full_name.to_lowercase().replace(' ', "."),
            email: email.to_string(),
            role: "user".to_string(),
            status: "kontrak".to_string(),
            is_married: false,
            is_active: true,
        }
    }

    const FIELDS: &[FieldSpec<Tenant>] = &[
        FieldSpec {
            key: "full_name",
            label: "Nama Lengkap",
            text: Some(|t: &Tenant| t.full_name.clone()),
            sort_key: Some(|t: &Tenant| SortValue::text(t.full_name.clone())),
        },
        FieldSpec {
            key: "email",
            label: "Email",
            text: Some(|t: &Tenant| t.email.clone()),
            sort_key: None,
        },
    ];

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let items = vec![
            tenant(1, "Budi Santoso", "budi@kost.id"),
            tenant(2, "Citra Dewi", "citra@kost.id"),
        ];
        assert_eq!(filter_indices(&items, FIELDS, ""), vec![0, 1]);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let items = vec![
            tenant(1, "Budi Santoso", "budi@kost.id"),
            tenant(2, "Citra Dewi", "citra@kost.id"),
        ];
        assert_eq!(filter_indices(&items, FIELDS, "SANT"), vec![0]);
    }

    #[test]
    fn test_any_designated_field_matches() {
        let items = vec![
            tenant(1, "Budi Santoso", "budi@kost.id"),
            tenant(2, "Citra Dewi", "citra@mail.com"),
        ];
        // "mail.com" only appears in Citra's email, not her name
        assert_eq!(filter_indices(&items, FIELDS, "mail.com"), vec![1]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let items = vec![tenant(1, "Budi Santoso", "budi@kost.id")];
        assert!(filter_indices(&items, FIELDS, "zzz").is_empty());
    }
}
