//! Typed error enum for the fetch crate.

use thiserror::Error;

/// Errors from fetching a listing page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code} for {url}")]
    HttpStatus { code: u16, url: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl FetchError {
    /// Whether the request ran out of time (connect or read).
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpRequest(e) if e.is_timeout())
    }
}
