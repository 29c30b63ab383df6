//! `SQLite` storage implementation
//!
//! One connection per process, guarded by a mutex so the read-only HTTP
//! handlers can share it. All methods are synchronous.

// SQLite uses i64 for counts/limits, Rust uses usize
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod liveries;
mod transaction;

pub use liveries::LiveryFilter;
pub use transaction::{InsertOutcome, PageTransaction};

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::StorageError;
use crate::schema;

/// Main storage struct wrapping the single `SQLite` connection
#[derive(Debug)]
pub struct Storage {
    conn: Mutex<Connection>,
}

pub(crate) fn lock_conn(mutex: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, StorageError> {
    mutex.lock().map_err(|e| StorageError::LockPoisoned(e.to_string()))
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

fn init_connection(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("PRAGMA busy_timeout = 30000;")?;
    Ok(())
}

impl Storage {
    /// Open (or create) the database file. The schema is not touched;
    /// call [`Storage::ensure_schema`] before writing.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;
        init_connection(&conn)?;
        tracing::info!(path = %db_path.display(), "Storage opened");
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Private in-memory database, gone when the handle is dropped.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        init_connection(&conn)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Create the `liveries` table if it does not exist. Idempotent.
    pub fn ensure_schema(&self) -> Result<(), StorageError> {
        let conn = lock_conn(&self.conn)?;
        schema::ensure_schema(&conn)?;
        Ok(())
    }

    pub fn has_schema(&self) -> Result<bool, StorageError> {
        let conn = lock_conn(&self.conn)?;
        Ok(schema::table_exists(&conn, schema::LIVERIES_TABLE)?)
    }

    /// Run `f` inside one transaction.
    ///
    /// Commits when `f` returns `Ok`. On `Err`, or if `f` panics, the
    /// transaction is dropped uncommitted and rolls back.
    pub fn with_page_transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&PageTransaction<'_>) -> Result<T, E>,
        E: From<StorageError>,
    {
        let mut conn = lock_conn(&self.conn)?;
        let tx = conn.transaction().map_err(StorageError::from)?;
        let page = PageTransaction::new(&tx);
        let out = f(&page)?;
        tx.commit().map_err(StorageError::from)?;
        Ok(out)
    }

    /// Close the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<(), StorageError> {
        let conn = self.conn.into_inner().map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        conn.close().map_err(|(_, e)| StorageError::Database(e))?;
        tracing::info!("Database connection closed.");
        Ok(())
    }
}
