//! HTTP client module
//!
//! Provides the HTTP client used by the page loader.
//!
//! # Features
//!
//! - **Single Attempt**: every request is sent exactly once, no retries
//! - **Status Classification**: non-2xx responses become `HttpStatus` errors
//! - **Timeouts**: per-client default with per-request override
//! - **Default Headers**: applied to every request

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
