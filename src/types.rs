//! Common types used throughout restaurant-list
//!
//! This module contains the restaurant record, the ordering directive and
//! the search parameters sent to the listing endpoint.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Restaurant
// ============================================================================

/// One entry of the restaurant listing.
///
/// Only the identifier and the display name are interpreted; every other
/// field the server sends is kept as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    /// Unique identifier, used as the render key
    pub id: u64,
    /// Display name
    #[serde(rename = "nome")]
    pub name: String,
    /// Remaining fields, untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl RestaurantSummary {
    /// Create a summary with no extra fields
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: JsonObject::new(),
        }
    }
}

// ============================================================================
// SortOrder
// ============================================================================

/// Server-side sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Whatever order the server uses when no `ordering` is sent
    #[default]
    #[serde(rename = "")]
    Default,
    /// By identifier
    #[serde(rename = "id")]
    Id,
    /// By name
    #[serde(rename = "nome")]
    Name,
}

impl SortOrder {
    /// All selectable orderings, in menu order
    pub const ALL: [SortOrder; 3] = [SortOrder::Default, SortOrder::Id, SortOrder::Name];

    /// Value of the `ordering` query parameter, `None` for the default
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortOrder::Default => None,
            SortOrder::Id => Some("id"),
            SortOrder::Name => Some("nome"),
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Default => "Padrão",
            SortOrder::Id => "Por ID",
            SortOrder::Name => "Por Nome",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "default" | "padrao" | "padrão" => Ok(SortOrder::Default),
            "id" => Ok(SortOrder::Id),
            "nome" | "name" => Ok(SortOrder::Name),
            other => Err(Error::invalid_value(
                "ordering",
                format!("unknown ordering '{other}' (expected default, id or nome)"),
            )),
        }
    }
}

// ============================================================================
// Search Parameters
// ============================================================================

/// Query parameters for a first-page request.
///
/// Both fields are absent by default; absent fields are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    /// Free-text filter
    pub search: Option<String>,
    /// Sort directive
    pub ordering: Option<SortOrder>,
}

impl SearchParameters {
    /// No filtering at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Build parameters from the form inputs, dropping empty ones
    pub fn from_form(search: &str, ordering: SortOrder) -> Self {
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            ordering: ordering.as_param().map(|_| ordering),
        }
    }

    /// Whether nothing would be attached to the request
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.ordering.is_none()
    }

    /// Query pairs in a stable order: `search` first, then `ordering`
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(2);
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(param) = self.ordering.and_then(SortOrder::as_param) {
            query.push(("ordering", param.to_string()));
        }
        query
    }
}

// ============================================================================
// Race Policy
// ============================================================================

/// What to do when several loads are in flight at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RacePolicy {
    /// Every response overwrites the view in arrival order, stale or not
    #[default]
    LastArrivalWins,
    /// Only the response to the most recently issued load is applied
    LatestRequestWins,
}
