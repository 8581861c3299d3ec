//! Restaurant list view
//!
//! The view owns its `ViewState` and exposes the user actions:
//! - `mount` - load the unfiltered first page
//! - `submit_search` - load the first page with the form's search/ordering
//! - `next` / `previous` - follow a server-issued cursor, if present
//!
//! Each action spawns one fire-and-forget load. Failures go to a
//! `DiagnosticSink` and never reach the displayed state.

mod component;
mod diagnostics;
mod loader;

pub use component::RestaurantListView;
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use loader::PageSource;

#[cfg(test)]
mod tests;
