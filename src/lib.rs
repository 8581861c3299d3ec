//! # restaurant-list
//!
//! Paginated restaurant listing client with free-text search, server-side
//! ordering and cursor navigation.
//!
//! ## Features
//!
//! - **Page Envelope**: `{ results, next, previous }` pages from a REST endpoint
//! - **Search & SortOrder**: optional `search` / `ordering` query parameters
//! - **Cursor Navigation**: `next` / `previous` links followed verbatim
//! - **Single State Owner**: one view owns its state and replaces it per page
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restaurant_list::{ClientConfig, RestaurantListView, Result, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let view = RestaurantListView::from_config(&ClientConfig::default())?;
//!
//!     // First page, unfiltered
//!     view.mount().await.ok();
//!
//!     // Search form
//!     view.set_search("pizza").await;
//!     view.set_ordering(SortOrder::Name).await;
//!     view.submit_search().await.await.ok();
//!
//!     // Pagination controls (None when disabled)
//!     if let Some(load) = view.next().await {
//!         load.await.ok();
//!     }
//!
//!     println!("{:?}", view.snapshot().await.restaurants);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   RestaurantListView                     │
//! │  mount()   submit_search()   next()   previous()         │
//! └───────────────────────┬──────────────────────────────────┘
//!                         │ load_page(url, params)
//! ┌───────────┬───────────┴─────┬──────────────┬─────────────┐
//! │ PageSource│  DiagnosticSink │  ViewState   │  Render     │
//! ├───────────┼─────────────────┼──────────────┼─────────────┤
//! │ HTTP GET  │ tracing error   │ page+cursors │ ItemRenderer│
//! │ JSON page │ recording       │ form inputs  │ controls    │
//! └───────────┴─────────────────┴──────────────┴─────────────┘
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

/// HTTP client
pub mod http;

/// Page envelope and navigation direction
pub mod pagination;

/// View state
pub mod state;

/// The list view component and its page loader
pub mod view;

/// Text rendering
pub mod render;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{Direction, Page};
pub use state::ViewState;
pub use types::*;
pub use view::{DiagnosticSink, PageSource, RestaurantListView};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
