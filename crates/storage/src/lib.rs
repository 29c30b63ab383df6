//! Storage layer for livery-scraper
//!
//! SQLite-backed catalogue of livery records with per-page transactions
//! and an OR-dedup insert on registration / image URL.

mod error;
mod schema;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use schema::LIVERIES_TABLE;
pub use storage::{InsertOutcome, LiveryFilter, PageTransaction, Storage};
