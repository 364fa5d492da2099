//! Paginated List
//!
//! Partitions a [`LazyList`] into fixed-size pages and owns the
//! current-page state.

use crate::error::{Error, Result};

use super::lazy_list::{LazyIter, LazyList};
use super::stream::RowStream;

/// Fixed-size pagination over a [`LazyList`]
///
/// Page navigation never fails: out-of-range page requests are silently
/// clamped to the nearest valid page. Navigation controls are expected to
/// be disabled at the boundaries, so out-of-range calls are purely
/// defensive and not worth an error path.
pub struct PaginatedList<S: RowStream, T> {
    lazy: LazyList<S, T>,
    page_size: usize,
    page_count: usize,
    current_page: usize,
}

impl<S: RowStream, T: Clone> PaginatedList<S, T> {
    /// Create a new PaginatedList with `page_size` items per page
    ///
    /// Fails with [`Error::Invalid`] when `page_size` is zero. An empty
    /// list still has one (empty) page.
    pub fn new(lazy: LazyList<S, T>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::Invalid {
                message: "page size must be greater than zero".into(),
            });
        }
        let page_count = lazy.len().div_ceil(page_size).max(1);
        Ok(Self {
            lazy,
            page_size,
            page_count,
            current_page: 0,
        })
    }

    /// Items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of pages, at least 1
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Current page index in `[0, page_count)`
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jump to `page`, clamped into the valid page range
    pub fn set_current_page(&mut self, page: i64) {
        let last = (self.page_count - 1) as i64;
        self.current_page = page.clamp(0, last) as usize;
    }

    /// Advance one page; a no-op on the last page
    pub fn next_page(&mut self) {
        self.set_current_page(self.current_page as i64 + 1);
    }

    /// Go back one page; a no-op on the first page
    pub fn prior_page(&mut self) {
        self.set_current_page(self.current_page as i64 - 1);
    }

    /// Global index of the first slot on the current page
    pub fn current_start_index(&self) -> usize {
        self.current_page * self.page_size
    }

    /// Global index of the last record on the current page
    pub fn current_end_index(&self) -> usize {
        (self.current_start_index() + self.current_page_item_count()).saturating_sub(1)
    }

    /// Number of records on the current page
    ///
    /// Equals the page size except on a short last page; 0 only for an
    /// empty list.
    pub fn current_page_item_count(&self) -> usize {
        self.page_size
            .min(self.lazy.len() - self.current_start_index())
    }

    /// Total number of records across all pages
    pub fn full_list_size(&self) -> usize {
        self.lazy.len()
    }

    /// True iff there is more than one page
    pub fn is_pagination_necessary(&self) -> bool {
        self.page_count > 1
    }

    /// True on page 0
    pub fn is_on_first_page(&self) -> bool {
        self.current_page == 0
    }

    /// True on the last page
    pub fn is_on_last_page(&self) -> bool {
        self.current_page + 1 == self.page_count
    }

    /// Translate a page-local position to a global index
    pub fn full_list_position(&self, position: usize) -> usize {
        self.current_start_index() + position
    }

    /// Get the record at `position` within the current page
    ///
    /// Returns `Ok(None)` when the global index falls past the end of the
    /// list; display surfaces may ask for a full page of slots even when
    /// the last page is only partially filled.
    pub fn get(&mut self, position: usize) -> Result<Option<T>> {
        let index = self.full_list_position(position);
        if index >= self.lazy.len() {
            return Ok(None);
        }
        self.lazy.get(index).map(Some)
    }

    /// Iterate over the entire underlying list, not just the current page
    pub fn iter(&mut self) -> LazyIter<'_, S, T> {
        self.lazy.iter()
    }

    /// Release the owned lazy list
    pub fn close(&mut self) {
        self.lazy.close();
    }
}
