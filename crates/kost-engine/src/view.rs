//! # Collection View
//!
//! The single state owner for one screen's list: collection, filter, sort,
//! page, load status, and the create/edit form. The rendering layer reads
//! one [`ViewSnapshot`] and forwards user intents back through the methods
//! here — never through independently mutated variables.
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CollectionView<T, S>                                 │
//! │                                                                         │
//! │  Rendering intent          Engine method           State change         │
//! │  ────────────────          ─────────────           ────────────         │
//! │                                                                         │
//! │  Mount / Retry ──────────► load() ───────────────► items replaced      │
//! │  Type in search ─────────► set_filter(q) ────────► filter, page := 1   │
//! │  Click column header ────► set_sort(desc) ───────► descriptor          │
//! │  Pick rows-per-page ─────► set_page_size(n) ─────► size, page := 1     │
//! │  Click page N ───────────► set_page(n) ──────────► page (clamped)      │
//! │  Prev / Next ────────────► previous/next_page ───► page (boundary      │
//! │                                                     no-ops)            │
//! │  Read table ─────────────► snapshot() ───────────► (read only)         │
//! │                                                                         │
//! │  Derived state is recomputed from scratch on every snapshot — it is    │
//! │  a pure function of (collection, filter, sort, page), nothing cached.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::form::{FormState, PendingMutation};
use crate::source::CollectionSource;
use kost_api::FieldErrors;
use kost_core::{
    filter::filter_indices, sort::sort_indices, Entity, PageState, SortDescriptor, SortValue,
    ViewConfig, ViewResult,
};

// =============================================================================
// Load Status
// =============================================================================

/// Fetch lifecycle for the collection.
///
/// `Loading` is the only state in which the rendering layer shows a
/// spinner instead of the derived view. `Failed` leaves the collection
/// empty; retry is an explicit `load()` call, never automatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LoadStatus {
    /// Not yet loaded (before mount).
    Idle,
    /// Fetch outstanding.
    Loading,
    /// Collection hydrated.
    Ready,
    /// Fetch failed; collection is empty.
    Failed,
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything the rendering layer needs for one frame of one screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot<T> {
    pub status: LoadStatus,
    /// The visible page slice, filtered and sorted.
    pub items: Vec<T>,
    /// Size of the raw collection ("Total N" label).
    pub total: usize,
    /// Size of the filtered set (drives the pager).
    pub filtered_total: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub filter: String,
    pub sort: SortDescriptor,
    pub form_open: bool,
    pub field_errors: FieldErrors,
    pub form_error: Option<String>,
    /// Last success confirmation, for the notification area.
    pub notice: Option<String>,
}

// =============================================================================
// Collection View
// =============================================================================

/// One screen's engine instance.
///
/// Exclusively owns its collection and view state; dependent-selection
/// links (see [`crate::cascade`]) borrow candidate data read-only and
/// never mutate it.
pub struct CollectionView<T: 'static, S> {
    source: S,
    config: &'static ViewConfig<T>,
    items: Vec<T>,
    filter: String,
    sort: SortDescriptor,
    sort_key: fn(&T) -> SortValue,
    page: PageState,
    status: LoadStatus,
    pub(crate) form: FormState,
    pub(crate) pending: Option<PendingMutation>,
    pub(crate) notice: Option<String>,
}

impl<T, S> CollectionView<T, S>
where
    T: Entity + Clone + Serialize + DeserializeOwned,
    S: CollectionSource<T>,
{
    /// Creates a view for one screen.
    ///
    /// ## Errors
    /// `ViewError` when the config's default sort field is not sortable
    /// (a configuration bug, caught at construction rather than render).
    pub fn new(source: S, config: &'static ViewConfig<T>) -> ViewResult<Self> {
        let sort = config.default_sort;
        let sort_key = config.sort_key_for(sort)?;
        Ok(CollectionView {
            source,
            config,
            items: Vec::new(),
            filter: String::new(),
            sort,
            sort_key,
            page: PageState::new(),
            status: LoadStatus::Idle,
            form: FormState::closed(),
            pending: None,
            notice: None,
        })
    }

    // -------------------------------------------------------------------------
    // Fetch & Hydrate
    // -------------------------------------------------------------------------

    /// Fetches the full remote collection, replacing the local copy
    /// wholesale and returning to page 1.
    ///
    /// On failure the collection stays empty and loading ends; there is no
    /// automatic retry and no timeout — a fetch that never settles leaves
    /// the view loading until it does.
    pub async fn load(&mut self) {
        self.status = LoadStatus::Loading;
        match self.source.load().await {
            Ok(items) => {
                debug!(screen = self.config.screen, count = items.len(), "hydrated");
                self.items = items;
                self.page.reset();
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                warn!(screen = self.config.screen, %err, "load failed");
                self.items = Vec::new();
                self.status = LoadStatus::Failed;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Sets the free-text filter and resets to page 1 (the previous page
    /// boundaries are meaningless over a different filtered set).
    /// Idempotent: repeating the same query yields the same derived state.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
        self.page.reset();
    }

    /// Equivalent to `set_filter("")`.
    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------

    /// Activates a sort descriptor (exactly one is active at a time).
    ///
    /// ## Errors
    /// `ViewError` when the field is unknown or not sortable; the previous
    /// descriptor stays active.
    pub fn set_sort(&mut self, descriptor: SortDescriptor) -> ViewResult<()> {
        self.sort_key = self.config.sort_key_for(descriptor)?;
        self.sort = descriptor;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Jumps to page `n`, clamped into range over the filtered set.
    pub fn set_page(&mut self, n: usize) {
        let len = self.filtered_len();
        self.page.set_page(n, len);
    }

    /// Changes rows-per-page and returns to page 1.
    pub fn set_page_size(&mut self, size: usize) -> ViewResult<()> {
        self.page.set_page_size(size)
    }

    /// No-op at the last page.
    pub fn next_page(&mut self) {
        let len = self.filtered_len();
        self.page.next_page(len);
    }

    /// No-op at page 1.
    pub fn previous_page(&mut self) {
        self.page.previous_page();
    }

    // -------------------------------------------------------------------------
    // Derivation
    // -------------------------------------------------------------------------

    /// Filtered-and-sorted indices into the raw collection, in visible
    /// order. Filter runs first, then the stable sort.
    fn visible_indices(&self) -> Vec<usize> {
        let mut indices = filter_indices(&self.items, self.config.fields, &self.filter);
        sort_indices(&self.items, &mut indices, self.sort_key, self.sort.direction);
        indices
    }

    fn filtered_len(&self) -> usize {
        filter_indices(&self.items, self.config.fields, &self.filter).len()
    }

    /// Builds the current frame for the rendering layer.
    pub fn snapshot(&self) -> ViewSnapshot<T> {
        let visible = self.visible_indices();
        let (start, end) = self.page.slice_bounds(visible.len());
        let items = visible[start..end]
            .iter()
            .map(|&idx| self.items[idx].clone())
            .collect();

        ViewSnapshot {
            status: self.status,
            items,
            total: self.items.len(),
            filtered_total: visible.len(),
            page: self.page.page(),
            page_count: self.page.page_count(visible.len()),
            page_size: self.page.page_size(),
            filter: self.filter.clone(),
            sort: self.sort,
            form_open: self.form.is_open(),
            field_errors: self.form.field_errors().clone(),
            form_error: self.form.form_error().map(str::to_string),
            notice: self.notice.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors (mutation logic lives in `mutate.rs`)
    // -------------------------------------------------------------------------

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// The raw hydrated collection, in fetch order.
    pub fn collection(&self) -> &[T] {
        &self.items
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The last submit cycle's record, if one is in flight or failed.
    pub fn pending(&self) -> Option<&PendingMutation> {
        self.pending.as_ref()
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Re-clamps the page after the filtered set shrank (delete may empty
    /// the final page).
    pub(crate) fn reclamp_page(&mut self) {
        let len = self.filtered_len();
        self.page.clamp(len);
    }

    pub(crate) fn config(&self) -> &'static ViewConfig<T> {
        self.config
    }

    /// The underlying collection source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
