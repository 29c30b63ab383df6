//! Listing-page fetcher.
//!
//! One GET per page, fixed user agent, bounded timeout, no retries.

mod client;
pub mod error;

pub use client::{FetchConfig, HttpFetcher, PageFetcher};
pub use error::FetchError;
