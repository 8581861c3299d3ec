//! State types for the restaurant list view

use crate::pagination::{Direction, Page};
use crate::types::{RestaurantSummary, SearchParameters, SortOrder};
use serde::Serialize;
use url::Url;

/// Mutable state owned by one list view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    /// Restaurants on the displayed page
    pub restaurants: Vec<RestaurantSummary>,
    /// Forward cursor
    pub next: Option<Url>,
    /// Backward cursor
    pub previous: Option<Url>,
    /// Search box contents
    pub search: String,
    /// Selected ordering
    pub ordering: SortOrder,
}

impl ViewState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed page wholesale.
    ///
    /// Form inputs are left alone; results are never appended.
    pub fn apply_page(&mut self, page: Page<RestaurantSummary>) {
        self.restaurants = page.results;
        self.next = page.next;
        self.previous = page.previous;
    }

    /// Parameters the search form would submit right now
    pub fn search_parameters(&self) -> SearchParameters {
        SearchParameters::from_form(&self.search, self.ordering)
    }

    /// Cursor for a direction, if that control is enabled
    pub fn cursor(&self, direction: Direction) -> Option<&Url> {
        match direction {
            Direction::Next => self.next.as_ref(),
            Direction::Previous => self.previous.as_ref(),
        }
    }

    /// Whether the control for a direction is enabled
    pub fn is_enabled(&self, direction: Direction) -> bool {
        self.cursor(direction).is_some()
    }
}
