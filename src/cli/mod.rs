//! CLI module
//!
//! Command-line interface for browsing the restaurant listing.
//!
//! # Commands
//!
//! - `list` - Load one page (optionally filtered) and print it
//! - `browse` - Interactive session with search, ordering and paging

mod commands;
mod runner;

pub use commands::{BrowseCommand, Cli, Commands, OutputFormat};
pub use runner::Runner;
