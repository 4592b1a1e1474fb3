//! Pagination controller
//!
//! Tracks the current page of a collection it never sees. Sizing comes from a
//! [`CountProvider`], contents from a page provider closure.

use super::types::{page_count, CountProvider, PageInfo, PageProvider, PageWindow};
use crate::error::{Error, Result};
use std::fmt;
use tracing::{debug, trace, warn};

/// Default number of entries per page
pub const DEFAULT_PAGE_SIZE: u64 = 1;

/// Pagination state over a caller-owned collection
///
/// Configuration methods return `&mut Self` so they can be chained:
///
/// ```
/// use pagectl::PaginationController;
///
/// let items: Vec<u32> = (0..25).collect();
/// let source = items.clone();
///
/// let mut controller = PaginationController::new();
/// controller
///     .set_count_provider(move || items.len())?
///     .set_page_size(10)?
///     .set_page_provider(move |offset, limit| {
///         source
///             .iter()
///             .skip(offset as usize)
///             .take(limit as usize)
///             .copied()
///             .collect::<Vec<_>>()
///     });
///
/// assert_eq!(controller.number_of_pages(), 3);
/// assert!(controller.set_current_page(3));
/// assert_eq!(controller.fetch_page()?, vec![20, 21, 22, 23, 24]);
/// # Ok::<(), pagectl::Error>(())
/// ```
pub struct PaginationController<T> {
    page_size: u64,
    current_page: u64,
    number_of_pages: u64,
    number_of_entries: u64,
    clamp_on_recount: bool,
    count_provider: Option<Box<dyn CountProvider + Send>>,
    page_provider: Option<PageProvider<T>>,
}

impl<T> PaginationController<T> {
    /// Create a controller with page size 1, on page 1, with no providers
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            number_of_pages: 0,
            number_of_entries: 0,
            clamp_on_recount: false,
            count_provider: None,
            page_provider: None,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Set the number of entries per page and recompute the page count
    ///
    /// A size of 0 is rejected before any state changes. Otherwise the size is
    /// stored first, so it survives a failed recomputation.
    pub fn set_page_size(&mut self, size: u64) -> Result<&mut Self> {
        if size == 0 {
            return Err(Error::InvalidPageSize { size });
        }
        self.page_size = size;
        self.recalculate()?;
        Ok(self)
    }

    /// Set the count provider and recompute the page count
    pub fn set_count_provider<P>(&mut self, provider: P) -> Result<&mut Self>
    where
        P: CountProvider + Send + 'static,
    {
        self.count_provider = Some(Box::new(provider));
        self.recalculate()?;
        Ok(self)
    }

    /// Set the page provider
    ///
    /// Page counts are unaffected.
    pub fn set_page_provider<F>(&mut self, provider: F) -> &mut Self
    where
        F: FnMut(u64, u64) -> T + Send + 'static,
    {
        self.page_provider = Some(Box::new(provider));
        self
    }

    /// Clamp the current page into range whenever the page count is recomputed
    ///
    /// Off by default: a shrinking collection leaves the current page where it
    /// was, possibly past the last page.
    pub fn set_clamp_on_recount(&mut self, clamp: bool) -> &mut Self {
        self.clamp_on_recount = clamp;
        self
    }

    /// Ask the count provider for the collection size and recompute the page count
    ///
    /// Called by the setters; call it directly after the collection changes.
    pub fn recalculate(&mut self) -> Result<()> {
        let provider = self
            .count_provider
            .as_mut()
            .ok_or(Error::MissingCountProvider)?;
        let entries = provider.count()?;

        self.number_of_entries = entries;
        self.number_of_pages = page_count(entries, self.page_size);
        debug!(
            entries,
            page_size = self.page_size,
            pages = self.number_of_pages,
            "Recalculated page count"
        );

        if self.clamp_on_recount && self.current_page > self.number_of_pages {
            let clamped = self.number_of_pages.max(1);
            if clamped != self.current_page {
                warn!(
                    from = self.current_page,
                    to = clamped,
                    "Current page past the last page, clamping"
                );
                self.current_page = clamped;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Jump to `page`
    ///
    /// Returns `false` and leaves the position alone unless
    /// `1 <= page <= number_of_pages`.
    pub fn set_current_page(&mut self, page: u64) -> bool {
        if !(1..=self.number_of_pages).contains(&page) {
            trace!(page, pages = self.number_of_pages, "Page out of range");
            return false;
        }
        self.current_page = page;
        true
    }

    /// Advance one page, or return `false` on the last page or when there are no pages
    ///
    /// A current page left past the last page by a recount keeps advancing.
    pub fn next_page(&mut self) -> bool {
        if self.current_page == self.number_of_pages || self.number_of_pages == 0 {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Go back one page, or return `false` when already on page 1
    pub fn prev_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Jump to page 1 if there is one
    pub fn first_page(&mut self) -> bool {
        self.set_current_page(1)
    }

    /// Jump to the last page if there is one
    pub fn last_page(&mut self) -> bool {
        self.set_current_page(self.number_of_pages)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn number_of_pages(&self) -> u64 {
        self.number_of_pages
    }

    /// Entry count reported by the last recomputation
    pub fn number_of_entries(&self) -> u64 {
        self.number_of_entries
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.number_of_pages
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn has_count_provider(&self) -> bool {
        self.count_provider.is_some()
    }

    pub fn has_page_provider(&self) -> bool {
        self.page_provider.is_some()
    }

    /// Offset and limit for the current page
    pub fn window(&self) -> PageWindow {
        PageWindow::for_page(self.current_page, self.page_size)
    }

    /// Snapshot of the current position
    pub fn info(&self) -> PageInfo {
        let window = self.window();
        PageInfo {
            current_page: self.current_page,
            number_of_pages: self.number_of_pages,
            number_of_entries: self.number_of_entries,
            page_size: self.page_size,
            offset: window.offset,
            limit: window.limit,
            is_last_page: self.is_last_page(),
        }
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    /// Fetch the current page from the page provider
    ///
    /// The window is derived from the current page as-is; it is not checked
    /// against the page count.
    pub fn fetch_page(&mut self) -> Result<T> {
        let window = self.window();
        let provider = self
            .page_provider
            .as_mut()
            .ok_or(Error::MissingPageProvider)?;

        debug!(
            page = self.current_page,
            offset = window.offset,
            limit = window.limit,
            "Fetching page"
        );
        Ok(provider(window.offset, window.limit))
    }

    /// Iterate from the current page to the last one, fetching each
    ///
    /// The controller is left on the last page visited.
    pub fn iter_pages(&mut self) -> PageIter<'_, T> {
        PageIter {
            controller: self,
            started: false,
            done: false,
        }
    }
}

impl<T> Default for PaginationController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PaginationController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .field("number_of_pages", &self.number_of_pages)
            .field("number_of_entries", &self.number_of_entries)
            .field("clamp_on_recount", &self.clamp_on_recount)
            .field("count_provider", &self.count_provider.is_some())
            .field("page_provider", &self.page_provider.is_some())
            .finish()
    }
}

/// Iterator over pages, see [`PaginationController::iter_pages`]
pub struct PageIter<'a, T> {
    controller: &'a mut PaginationController<T>,
    started: bool,
    done: bool,
}

impl<T> Iterator for PageIter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let past_last = self.controller.current_page() >= self.controller.number_of_pages();
        if self.controller.number_of_pages() == 0
            || (self.started && (past_last || !self.controller.next_page()))
        {
            self.done = true;
            return None;
        }
        self.started = true;

        let page = self.controller.fetch_page();
        if page.is_err() {
            self.done = true;
        }
        Some(page)
    }
}
