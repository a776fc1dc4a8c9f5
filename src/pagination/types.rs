//! Pagination types
//!
//! `PageResult` is what the page fetcher hands to the driver;
//! `PaginationState` is the driver's bookkeeping for one run.

use crate::types::Gist;

/// Page numbering starts here
pub const FIRST_PAGE: u32 = 1;

/// Outcome of one successfully fetched page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageResult {
    /// Gists in the order the server returned them
    pub records: Vec<Gist>,
    /// Whether the server advertised a following page
    pub has_next: bool,
    /// Last page number from the `rel="last"` link, for progress only
    pub last_page: Option<u32>,
}

impl PageResult {
    /// Create a page result
    pub fn new(records: Vec<Gist>, has_next: bool) -> Self {
        Self {
            records,
            has_next,
            last_page: None,
        }
    }

    /// Set the advertised last page
    #[must_use]
    pub fn with_last_page(mut self, last_page: Option<u32>) -> Self {
        self.last_page = last_page;
        self
    }

    /// Number of gists on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the page carried no gists
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Page to request next
    pub page: u32,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Total gists fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::with_page(FIRST_PAGE)
    }
}

impl PaginationState {
    /// Create a new pagination state starting at page 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            pages_fetched: 0,
            total_fetched: 0,
            done: false,
        }
    }

    /// Record a fetched page and move to the next one, or finish
    ///
    /// Pagination also finishes when the page counter cannot go any higher.
    pub fn advance(&mut self, page: &PageResult) {
        self.pages_fetched = self.pages_fetched.saturating_add(1);
        self.total_fetched = self.total_fetched.saturating_add(page.len() as u64);
        match self.page.checked_add(1) {
            Some(next) if page.has_next => self.page = next,
            _ => self.done = true,
        }
    }
}
