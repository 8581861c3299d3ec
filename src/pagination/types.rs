//! Page envelope types

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// One page of results as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub results: Vec<T>,
    /// Link to the following page
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub next: Option<Url>,
    /// Link to the preceding page
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub previous: Option<Url>,
}

impl<T> Page<T> {
    /// Create a page with no cursors
    pub fn new(results: Vec<T>) -> Self {
        Self {
            results,
            next: None,
            previous: None,
        }
    }

    /// Set the forward cursor
    #[must_use]
    pub fn with_next(mut self, next: Url) -> Self {
        self.next = Some(next);
        self
    }

    /// Set the backward cursor
    #[must_use]
    pub fn with_previous(mut self, previous: Url) -> Self {
        self.previous = Some(previous);
        self
    }
}

/// `null` and `""` both mean "no such page"; anything else must be a URL
fn deserialize_cursor<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => Url::parse(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward, following `next`
    Next,
    /// Backward, following `previous`
    Previous,
}

impl Direction {
    /// Control label
    pub fn label(self) -> &'static str {
        match self {
            Direction::Next => "Próxima página",
            Direction::Previous => "Página anterior",
        }
    }
}
