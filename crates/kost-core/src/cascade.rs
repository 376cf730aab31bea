//! # Cascading Dependent Selection
//!
//! The autocomplete pair every form with a foreign key repeats: a governing
//! field (e.g. tenant) whose selection narrows a dependent field's candidate
//! list (e.g. houses occupied by that tenant).
//!
//! ## State Machine (per governed field)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Unselected ── typing ──► Selecting ── pick ──► Selected(id)          │
//! │       ▲                                              │                  │
//! │       └──────────────── clear ───────────────────────┘                  │
//! │                                                                         │
//! │   Selecting a governing value:                                         │
//! │     • dependent candidates := { x | x.link == governing id }           │
//! │     • dependent selection  := Unselected                               │
//! │   Clearing the governing value:                                        │
//! │     • dependent candidates := full set again                           │
//! │   Typing free text (either field):                                     │
//! │     • filters the CURRENTLY SCOPED list, selection untouched           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This module is pure: candidates are borrowed slices, the link owns no
//! collection data.

use serde::Serialize;
use ts_rs::TS;

use crate::types::EntityId;

// =============================================================================
// Candidates
// =============================================================================

/// One option in a selection list: id, display label, and the foreign-key
/// relation to the governing field's entity (when any).
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Candidate {
    pub id: EntityId,
    pub label: String,
    /// Foreign key to the governing entity; `None` for unlinked candidates
    /// (e.g. a vacant house) and for governing-side candidates themselves.
    pub link: Option<EntityId>,
}

impl Candidate {
    pub fn new(id: EntityId, label: impl Into<String>) -> Self {
        Candidate {
            id,
            label: label.into(),
            link: None,
        }
    }

    pub fn linked(id: EntityId, label: impl Into<String>, link: EntityId) -> Self {
        Candidate {
            id,
            label: label.into(),
            link: Some(link),
        }
    }
}

/// Free-text matching policy for an autocomplete field.
///
/// Screen-specific: the houses screen matches tenant names by prefix, the
/// payments screen by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MatchMode {
    Prefix,
    Substring,
}

impl MatchMode {
    /// Whether `label` matches `input` under this mode, ignoring case.
    /// Empty input matches everything.
    pub fn matches(self, label: &str, input: &str) -> bool {
        if input.is_empty() {
            return true;
        }
        let label = label.to_lowercase();
        let input = input.to_lowercase();
        match self {
            MatchMode::Prefix => label.starts_with(&input),
            MatchMode::Substring => label.contains(&input),
        }
    }
}

// =============================================================================
// Selection State
// =============================================================================

/// Lifecycle of one autocomplete field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase", tag = "phase", content = "id")]
#[ts(export)]
pub enum SelectionPhase {
    /// Nothing chosen, nothing typed.
    Unselected,
    /// Free text typed, no committed choice yet.
    Selecting,
    /// A candidate committed by id.
    Selected(EntityId),
}

impl SelectionPhase {
    /// The committed id, when in `Selected`.
    pub fn selected_id(&self) -> Option<EntityId> {
        match self {
            SelectionPhase::Selected(id) => Some(*id),
            _ => None,
        }
    }
}

/// A governing/dependent field pair.
///
/// Owns only selection state and typed input; candidate data stays with the
/// caller and is passed by reference into the candidate methods.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CascadeLink {
    governing: SelectionPhase,
    governing_input: String,
    governing_mode: MatchMode,

    dependent: SelectionPhase,
    dependent_input: String,
    dependent_mode: MatchMode,
}

impl CascadeLink {
    /// Creates an unselected pair with the given matching policies.
    pub fn new(governing_mode: MatchMode, dependent_mode: MatchMode) -> Self {
        CascadeLink {
            governing: SelectionPhase::Unselected,
            governing_input: String::new(),
            governing_mode,
            dependent: SelectionPhase::Unselected,
            dependent_input: String::new(),
            dependent_mode,
        }
    }

    pub fn governing(&self) -> SelectionPhase {
        self.governing
    }

    pub fn dependent(&self) -> SelectionPhase {
        self.dependent
    }

    /// Commits a governing choice; the dependent field resets to
    /// `Unselected` and its typed input is discarded (its old candidates
    /// may no longer be in scope).
    pub fn select_governing(&mut self, id: EntityId) {
        self.governing = SelectionPhase::Selected(id);
        self.dependent = SelectionPhase::Unselected;
        self.dependent_input.clear();
    }

    /// Clears the governing choice; dependents return to the full
    /// candidate list.
    pub fn clear_governing(&mut self) {
        self.governing = SelectionPhase::Unselected;
        self.governing_input.clear();
        self.dependent = SelectionPhase::Unselected;
        self.dependent_input.clear();
    }

    /// Types free text into the governing field. Filters candidates only;
    /// a committed selection stays committed.
    pub fn input_governing(&mut self, text: impl Into<String>) {
        self.governing_input = text.into();
        if self.governing == SelectionPhase::Unselected && !self.governing_input.is_empty() {
            self.governing = SelectionPhase::Selecting;
        }
        if self.governing == SelectionPhase::Selecting && self.governing_input.is_empty() {
            self.governing = SelectionPhase::Unselected;
        }
    }

    /// Commits a dependent choice.
    pub fn select_dependent(&mut self, id: EntityId) {
        self.dependent = SelectionPhase::Selected(id);
    }

    /// Types free text into the dependent field; scoping by the governing
    /// selection is unaffected.
    pub fn input_dependent(&mut self, text: impl Into<String>) {
        self.dependent_input = text.into();
        if self.dependent == SelectionPhase::Unselected && !self.dependent_input.is_empty() {
            self.dependent = SelectionPhase::Selecting;
        }
        if self.dependent == SelectionPhase::Selecting && self.dependent_input.is_empty() {
            self.dependent = SelectionPhase::Unselected;
        }
    }

    /// Governing candidates visible now: the full set, narrowed by typed
    /// input.
    pub fn governing_candidates(&self, full: &[Candidate]) -> Vec<Candidate> {
        full.iter()
            .filter(|c| self.governing_mode.matches(&c.label, &self.governing_input))
            .cloned()
            .collect()
    }

    /// Dependent candidates visible now: scoped by the governing selection
    /// (when committed), then narrowed by typed input.
    pub fn dependent_candidates(&self, full: &[Candidate]) -> Vec<Candidate> {
        full.iter()
            .filter(|c| match self.governing.selected_id() {
                Some(gov) => c.link == Some(gov),
                None => true,
            })
            .filter(|c| self.dependent_mode.matches(&c.label, &self.dependent_input))
            .cloned()
            .collect()
    }
}
