//! Submission-history state with derived pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of the server's submission history:
//! the full list, the 1-based page cursor, and the transient loading/error
//! flags. Pagination is derived from the list on every read rather than
//! cached, so it can never drift from the data.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use crate::net::types::Submission;

/// Fixed number of submissions shown per history page.
pub const ITEMS_PER_PAGE: usize = 2;

/// Submission-list state: the full history plus the derived page view.
#[derive(Clone, Debug)]
pub struct SubmissionsState {
    /// Every known submission, newest first.
    pub items: Vec<Submission>,
    /// 1-based page cursor into `items`.
    pub current_page: usize,
    /// True while a history load/refresh is in flight.
    pub loading: bool,
    /// Visible error message from the last failed history load, if any.
    pub error: Option<String>,
}

impl Default for SubmissionsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            loading: false,
            error: None,
        }
    }
}

impl SubmissionsState {
    /// Number of pages needed to show every item: `ceil(len / ITEMS_PER_PAGE)`.
    /// Zero when the list is empty.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(ITEMS_PER_PAGE)
    }

    /// The slice of items visible on the current page.
    pub fn visible(&self) -> &[Submission] {
        let start = (self.current_page.saturating_sub(1)) * ITEMS_PER_PAGE;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + ITEMS_PER_PAGE).min(self.items.len());
        &self.items[start..end]
    }

    /// Replace the whole history after a successful load and jump back to the
    /// first page. Clears any stale load error.
    pub fn replace_all(&mut self, items: Vec<Submission>) {
        self.items = items;
        self.current_page = 1;
        self.error = None;
    }

    /// Optimistically insert a freshly created submission at the head of the
    /// list and jump to the first page so it is visible.
    pub fn prepend(&mut self, submission: Submission) {
        self.items.insert(0, submission);
        self.current_page = 1;
    }

    /// Replace the list entry matching the update's ID, if present.
    ///
    /// Updates are keyed by ID, so concurrent polls for different submissions
    /// can never clobber each other's entries. An update for an ID no longer
    /// in the list is dropped.
    pub fn apply_update(&mut self, updated: Submission) {
        if let Some(slot) = self.items.iter_mut().find(|s| s.id == updated.id) {
            *slot = updated;
        }
    }

    /// Move to `page` if it is within `1..=total_pages`. Returns whether the
    /// cursor actually moved.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() && page != self.current_page {
            self.current_page = page;
            true
        } else {
            false
        }
    }
}
