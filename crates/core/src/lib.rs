//! Core types and parsing for livery-scraper
//!
//! This crate contains the domain types shared across all other crates,
//! the pure description parser and the listing-page extractor.

mod config;
mod constants;
mod env_config;
mod error;
mod fields;
mod listing;
mod livery;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use fields::*;
pub use listing::*;
pub use livery::*;
