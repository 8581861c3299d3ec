//! Pagination module
//!
//! Supports the "page envelope" shape: one page of results plus
//! server-issued `next` / `previous` links.
//!
//! # Overview
//!
//! The server owns pagination. Cursors are complete URLs that already carry
//! the active search and ordering, so the client follows them verbatim and
//! never computes page numbers of its own.

mod types;

pub use types::{Direction, Page};

#[cfg(test)]
mod tests;
