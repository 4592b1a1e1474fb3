//! CLI module
//!
//! Command-line interface for paging through the lines of a text file.
//!
//! # Commands
//!
//! - `info` - Show page counts and the current position
//! - `show` - Print a single page
//! - `dump` - Print every page in order

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
