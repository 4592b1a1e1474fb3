//! Pagination module
//!
//! # Overview
//!
//! [`PaginationController`] holds the page size and current page of a
//! collection it never touches directly. Two injected collaborators do the
//! data work:
//!
//! - a [`CountProvider`] reports how many entries exist
//! - a [`PageProvider`] returns the entries for an offset/limit window
//!
//! Changing the page size or the count provider recomputes the page count
//! eagerly. Navigation hitting a boundary returns `false`; a missing
//! collaborator is an [`Error`](crate::Error).

mod controller;
mod types;

pub use controller::{PageIter, PaginationController, DEFAULT_PAGE_SIZE};
pub use types::{page_count, CountProvider, PageInfo, PageProvider, PageWindow};
