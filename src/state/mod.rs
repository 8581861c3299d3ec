//! View state
//!
//! Everything the restaurant list shows lives in one `ViewState` value:
//! the current page, its cursors and the form inputs.

mod types;

pub use types::ViewState;
