//! Pagination types and traits
//!
//! Defines the collaborator contracts the controller delegates to and the
//! small value types derived from controller state.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Produces the total number of entries in the caller's collection
///
/// Implemented for every closure `FnMut() -> N` whose result converts into a
/// `u64`. A result that does not convert (a negative `i64`, say) is reported as
/// [`Error::InvalidCount`].
pub trait CountProvider {
    /// Count the entries in the collection at call time
    fn count(&mut self) -> Result<u64>;
}

impl<F, N> CountProvider for F
where
    F: FnMut() -> N,
    N: TryInto<u64>,
    N::Error: fmt::Display,
{
    fn count(&mut self) -> Result<u64> {
        self().try_into().map_err(|e| Error::invalid_count(e.to_string()))
    }
}

/// Produces the contents of one page given an offset and a limit
///
/// The result type is opaque to the controller; it is handed back to the
/// caller of `fetch_page` untouched.
pub type PageProvider<T> = Box<dyn FnMut(u64, u64) -> T + Send>;

/// Zero-based offset and slice size for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Index of the first entry on the page
    pub offset: u64,
    /// Number of entries requested
    pub limit: u64,
}

impl PageWindow {
    /// Compute the window for a 1-based page number
    ///
    /// A page number of 0 is treated as page 1.
    pub fn for_page(page: u64, page_size: u64) -> Self {
        Self {
            offset: page.saturating_sub(1).saturating_mul(page_size),
            limit: page_size,
        }
    }

    /// Exclusive end index of the window
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }
}

/// Snapshot of the controller's position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u64,
    pub number_of_pages: u64,
    pub number_of_entries: u64,
    pub page_size: u64,
    pub offset: u64,
    pub limit: u64,
    pub is_last_page: bool,
}

/// Number of pages needed to hold `entries` at `page_size` entries per page
///
/// `page_size` must be non-zero.
pub fn page_count(entries: u64, page_size: u64) -> u64 {
    entries.div_ceil(page_size)
}
