//! # Pagination
//!
//! Page arithmetic over the filtered-and-sorted set.
//!
//! ## Page Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Page Boundaries                                      │
//! │                                                                         │
//! │  filtered+sorted: [a b c d e f g h i j k l]   (12 rows, page_size 5)   │
//! │                                                                         │
//! │  page 1 → [a b c d e]        page_count = ceil(12 / 5) = 3             │
//! │  page 2 → [f g h i j]                                                  │
//! │  page 3 → [k l]              ← short final page, never an error        │
//! │                                                                         │
//! │  Invariant: 1 <= page <= max(1, page_count)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{ViewError, ViewResult};

/// Rows-per-page default, matching the screens' initial select value.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Rows-per-page choices offered by every screen.
pub const PAGE_SIZE_CHOICES: &[usize] = &[5, 10, 15];

/// Current page index and size.
///
/// ## Invariants
/// - `page >= 1` always (even over an empty collection)
/// - `page <= max(1, page_count)` after every clamp
/// - `page_size >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl PageState {
    /// Creates page state at page 1 with the default size.
    pub fn new() -> Self {
        PageState {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Current 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current rows-per-page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages over `filtered_len` rows: `ceil(filtered / size)`.
    pub fn page_count(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.page_size)
    }

    /// Jumps to page `n`, clamped into `[1, max(1, page_count)]`.
    pub fn set_page(&mut self, n: usize, filtered_len: usize) {
        self.page = n.clamp(1, self.page_count(filtered_len).max(1));
    }

    /// Changes rows-per-page and resets to page 1 (the previous page
    /// boundary is meaningless under a new size).
    pub fn set_page_size(&mut self, size: usize) -> ViewResult<()> {
        if size == 0 {
            return Err(ViewError::InvalidPageSize { size });
        }
        self.page_size = size;
        self.page = 1;
        Ok(())
    }

    /// Advances one page; a no-op at the last page.
    pub fn next_page(&mut self, filtered_len: usize) {
        if self.page < self.page_count(filtered_len) {
            self.page += 1;
        }
    }

    /// Steps back one page; a no-op at page 1.
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Returns to page 1 (filter or size changes invalidate boundaries).
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Re-clamps after the filtered set shrank (e.g. a delete emptied the
    /// final page): rolls the page back into range.
    pub fn clamp(&mut self, filtered_len: usize) {
        let max = self.page_count(filtered_len).max(1);
        if self.page > max {
            self.page = max;
        }
    }

    /// Half-open row range `[start, end)` of the visible slice; short final
    /// pages yield a short range rather than failing.
    pub fn slice_bounds(&self, filtered_len: usize) -> (usize, usize) {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(filtered_len);
        (start.min(filtered_len), end)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
