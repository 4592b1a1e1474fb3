//! # pagectl
//!
//! A pagination controller for collections it never holds.
//!
//! Give a [`PaginationController`] a count provider and a page provider and
//! it tracks the page size, the page count, and the current page. Fetching a
//! page hands the provider an offset and a limit and returns whatever the
//! provider returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagectl::{PaginationController, Result};
//!
//! fn main() -> Result<()> {
//!     let mut controller = PaginationController::new();
//!     controller
//!         .set_count_provider(|| 25_u64)?
//!         .set_page_size(10)?
//!         .set_page_provider(|offset, limit| (offset, limit));
//!
//!     assert_eq!(controller.number_of_pages(), 3);
//!     assert!(controller.next_page());
//!     assert_eq!(controller.fetch_page()?, (10, 10));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  PaginationController                    │
//! │  set_page_size / set_count_provider → recalculate()      │
//! │  set_current_page / next_page / prev_page → bool         │
//! │  fetch_page() → page provider(offset, limit) → T         │
//! └──────────────────────────────────────────────────────────┘
//!            │                               │
//!   ┌────────┴────────┐             ┌────────┴────────┐
//!   │ CountProvider   │             │ PageProvider    │
//!   │ () → count      │             │ (offset, limit) │
//!   └─────────────────┘             └─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Pagination controller and provider contracts
pub mod pagination;

/// Settings loading
pub mod config;

/// In-memory line collection used by the CLI
pub mod source;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{CountProvider, PageInfo, PageProvider, PageWindow, PaginationController};
