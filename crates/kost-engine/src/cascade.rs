//! # Typed Pickers
//!
//! Screen-facing wrappers over the pure selection machinery in
//! [`kost_core::cascade`]: a standalone autocomplete ([`Picker`]) and a
//! governing/dependent pair ([`LinkedPicker`]). Each binds a projection
//! turning an entity slice (borrowed from its view's collection) into
//! candidate rows.
//!
//! ## Screen Wiring
//! ```text
//! ┌──────────────┬──────────────────────────────┬──────────────────────┐
//! │ Screen       │ Picker                       │ Match policy         │
//! ├──────────────┼──────────────────────────────┼──────────────────────┤
//! │ payments     │ tenant ──governs──► house    │ substring, substring │
//! │ houses       │ tenant (occupant field)      │ prefix               │
//! │ spendings    │ category                     │ substring            │
//! └──────────────┴──────────────────────────────┴──────────────────────┘
//! ```

use kost_core::catalog::{category_candidate, house_candidate, tenant_candidate};
use kost_core::{
    Candidate, CascadeLink, Category, EntityId, House, MatchMode, SelectionPhase, Tenant,
};

// =============================================================================
// Standalone Picker
// =============================================================================

/// One autocomplete field with no cascade: typed input narrows the
/// candidate list, a pick commits an id.
pub struct Picker<T: 'static> {
    phase: SelectionPhase,
    input: String,
    mode: MatchMode,
    project: fn(&T) -> Candidate,
}

impl<T> Picker<T> {
    pub fn new(mode: MatchMode, project: fn(&T) -> Candidate) -> Self {
        Picker {
            phase: SelectionPhase::Unselected,
            input: String::new(),
            mode,
            project,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn selected_id(&self) -> Option<EntityId> {
        self.phase.selected_id()
    }

    /// Types free text; a committed selection stays committed.
    pub fn input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if self.phase == SelectionPhase::Unselected && !self.input.is_empty() {
            self.phase = SelectionPhase::Selecting;
        }
        if self.phase == SelectionPhase::Selecting && self.input.is_empty() {
            self.phase = SelectionPhase::Unselected;
        }
    }

    /// Commits a candidate by id.
    pub fn select(&mut self, id: EntityId) {
        self.phase = SelectionPhase::Selected(id);
    }

    pub fn clear(&mut self) {
        self.phase = SelectionPhase::Unselected;
        self.input.clear();
    }

    /// Candidates visible now, projected from the caller's collection.
    pub fn candidates(&self, entities: &[T]) -> Vec<Candidate> {
        entities
            .iter()
            .map(self.project)
            .filter(|c| self.mode.matches(&c.label, &self.input))
            .collect()
    }
}

/// The occupant field on the houses screen (prefix-matched tenant names).
pub fn tenant_picker() -> Picker<Tenant> {
    Picker::new(MatchMode::Prefix, tenant_candidate)
}

/// The category field on the spendings screen.
pub fn category_picker() -> Picker<Category> {
    Picker::new(MatchMode::Substring, category_candidate)
}

// =============================================================================
// Linked Picker
// =============================================================================

/// A governing/dependent autocomplete pair over typed collections.
///
/// Selection state lives in the inner [`CascadeLink`]; this wrapper adds
/// the projections so callers pass entity slices rather than pre-built
/// candidate rows.
pub struct LinkedPicker<G: 'static, D: 'static> {
    link: CascadeLink,
    project_governing: fn(&G) -> Candidate,
    project_dependent: fn(&D) -> Candidate,
}

impl<G, D> LinkedPicker<G, D> {
    pub fn new(
        governing_mode: MatchMode,
        dependent_mode: MatchMode,
        project_governing: fn(&G) -> Candidate,
        project_dependent: fn(&D) -> Candidate,
    ) -> Self {
        LinkedPicker {
            link: CascadeLink::new(governing_mode, dependent_mode),
            project_governing,
            project_dependent,
        }
    }

    pub fn governing(&self) -> SelectionPhase {
        self.link.governing()
    }

    pub fn dependent(&self) -> SelectionPhase {
        self.link.dependent()
    }

    /// Commits the governing choice; the dependent field resets.
    pub fn select_governing(&mut self, id: EntityId) {
        self.link.select_governing(id);
    }

    /// Clears the governing choice; dependents return to the full list.
    pub fn clear_governing(&mut self) {
        self.link.clear_governing();
    }

    pub fn input_governing(&mut self, text: impl Into<String>) {
        self.link.input_governing(text);
    }

    pub fn select_dependent(&mut self, id: EntityId) {
        self.link.select_dependent(id);
    }

    pub fn input_dependent(&mut self, text: impl Into<String>) {
        self.link.input_dependent(text);
    }

    pub fn governing_candidates(&self, entities: &[G]) -> Vec<Candidate> {
        let full: Vec<Candidate> = entities.iter().map(self.project_governing).collect();
        self.link.governing_candidates(&full)
    }

    /// Scoped by the committed governing selection, then narrowed by typed
    /// input.
    pub fn dependent_candidates(&self, entities: &[D]) -> Vec<Candidate> {
        let full: Vec<Candidate> = entities.iter().map(self.project_dependent).collect();
        self.link.dependent_candidates(&full)
    }
}

/// The payments screen's pair: the chosen tenant scopes the house list to
/// that tenant's houses.
pub fn tenant_house_link() -> LinkedPicker<Tenant, House> {
    LinkedPicker::new(
        MatchMode::Substring,
        MatchMode::Substring,
        tenant_candidate,
        house_candidate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenants() -> Vec<Tenant> {
        let base = Tenant {
            id: 0,
            full_name: String::new(),
            phone_number: "08".to_string(),
            username: "u".to_string(),
            email: "e@kost.id".to_string(),
            role: "user".to_string(),
            status: "tetap".to_string(),
            is_married: false,
            is_active: true,
        };
        vec![
            Tenant {
                id: 1,
                full_name: "Budi Santoso".to_string(),
                ..base.clone()
            },
            Tenant {
                id: 2,
                full_name: "Citra Dewi".to_string(),
                ..base
            },
        ]
    }

    fn houses() -> Vec<House> {
        let mk = |id, address: &str, user_id| House {
            id,
            address: address.to_string(),
            status: "dihuni".to_string(),
            user_id,
            start_date: None,
            end_date: None,
            user: None,
        };
        vec![
            mk(10, "Jl. Melati No. 1", Some(1)),
            mk(11, "Jl. Melati No. 2", Some(2)),
            mk(12, "Jl. Anggrek No. 5", Some(1)),
        ]
    }

    #[test]
    fn test_tenant_selection_scopes_houses() {
        let mut link = tenant_house_link();
        link.select_governing(1);

        let ids: Vec<i64> = link
            .dependent_candidates(&houses())
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn test_house_picker_unscoped_until_tenant_committed() {
        let mut link = tenant_house_link();
        link.input_governing("budi"); // typing, not picking
        assert_eq!(link.dependent_candidates(&houses()).len(), 3);
    }

    #[test]
    fn test_occupant_picker_is_prefix_matched() {
        let mut picker = tenant_picker();
        picker.input("santoso");
        assert!(picker.candidates(&tenants()).is_empty());

        picker.input("bud");
        let matched = picker.candidates(&tenants());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_picker_selection_survives_typing() {
        let mut picker = tenant_picker();
        picker.select(2);
        picker.input("bu");
        assert_eq!(picker.selected_id(), Some(2));
    }
}
