//! Service layer for livery-scraper
//!
//! Drives the fetch → extract → store pipeline over a page range, one
//! page at a time.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod report;
mod scrape_service;

pub use error::ServiceError;
pub use report::{PageOutcome, PageReport, ScrapeReport};
pub use scrape_service::{ScrapeService, store_candidates};
