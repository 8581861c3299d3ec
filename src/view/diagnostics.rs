//! Diagnostic channel for failed loads

use crate::error::Error;
use std::sync::{Mutex, PoisonError};
use tracing::error;
use url::Url;

/// Receives one report per failed load
pub trait DiagnosticSink: Send + Sync {
    /// Report a failed load of `url`
    fn report(&self, url: &Url, error: &Error);
}

/// Reports failures as `tracing` error events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, url: &Url, err: &Error) {
        error!("Failed to load {}: {}", url, err);
    }
}

/// A recorded failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// URL that failed
    pub url: Url,
    /// Rendered error
    pub message: String,
}

/// Keeps every report in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports so far, oldest first
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of reports so far
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing was reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, url: &Url, err: &Error) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Diagnostic {
                url: url.clone(),
                message: err.to_string(),
            });
    }
}
