//! Paginated Adapter
//!
//! Binds the current page of a [`PaginatedList`] to a display surface:
//! stable row identities, bounded slot count, placeholder-friendly binding
//! and a full-content-changed signal after every page turn or refresh.

use crate::error::Result;

use super::lazy_list::{Converter, LazyList};
use super::paginated::PaginatedList;
use super::stream::RowStream;

/// List-binding adapter over a [`PaginatedList`]
pub struct PaginatedAdapter<S: RowStream, T> {
    pages: PaginatedList<S, T>,
    convert: Converter<S::Row, T>,
    page_size: usize,
    on_content_changed: Option<Box<dyn Fn() + Send>>,
}

impl<S: RowStream, T: Clone> PaginatedAdapter<S, T> {
    /// Create a new adapter rooted at page 0 of `stream`
    pub fn new(stream: S, convert: Converter<S::Row, T>, page_size: usize) -> Result<Self> {
        let pages = PaginatedList::new(LazyList::new(stream, convert.clone()), page_size)?;
        Ok(Self {
            pages,
            convert,
            page_size,
            on_content_changed: None,
        })
    }

    /// Set the handler invoked whenever the visible content changes
    pub fn on_content_changed(mut self, handler: impl Fn() + Send + 'static) -> Self {
        self.on_content_changed = Some(Box::new(handler));
        self
    }

    /// Number of slots on the current page
    pub fn count(&self) -> usize {
        self.pages.current_page_item_count()
    }

    /// Stable identity for the record at `position` on the current page
    ///
    /// The identity is the global row index, so a record keeps its id
    /// across page turns and the display surface's change tracking can
    /// recognize unchanged rows.
    pub fn item_id(&self, position: usize) -> i64 {
        self.pages.full_list_position(position) as i64
    }

    /// Fetch the record for the slot at `position`
    ///
    /// `Ok(None)` means the slot has no record (short last page); the
    /// caller renders a loading placeholder instead of failing.
    pub fn bind(&mut self, position: usize) -> Result<Option<T>> {
        self.pages.get(position)
    }

    /// Turn one page forward or backward and invalidate the surface
    ///
    /// Clamped at the boundaries like the underlying page navigation.
    pub fn paginate(&mut self, forward: bool) {
        if forward {
            self.pages.next_page();
        } else {
            self.pages.prior_page();
        }
        self.notify_content_changed();
    }

    /// Replace the underlying stream, resetting to page 0
    ///
    /// The previous paginated list is closed before the new one takes
    /// over, so the old stream is released deterministically.
    pub fn refresh(&mut self, stream: S) -> Result<()> {
        let pages = PaginatedList::new(
            LazyList::new(stream, self.convert.clone()),
            self.page_size,
        )?;
        self.pages.close();
        self.pages = pages;
        self.notify_content_changed();
        Ok(())
    }

    /// Read-only pagination state for rendering page indicators
    pub fn pages(&self) -> &PaginatedList<S, T> {
        &self.pages
    }

    /// Release the owned paginated list
    pub fn close(&mut self) {
        self.pages.close();
    }

    fn notify_content_changed(&self) {
        if let Some(handler) = &self.on_content_changed {
            handler();
        }
    }
}
