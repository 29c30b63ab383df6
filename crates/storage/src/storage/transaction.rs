use livery_core::NewLivery;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::StorageError;

/// Result of a dedup-checked insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { id: i64 },
    /// A row with the same registration or image URL already exists.
    Skipped { existing_id: i64 },
}

impl InsertOutcome {
    pub const fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// Writes scoped to one page's transaction. Obtained from
/// [`Storage::with_page_transaction`](super::Storage::with_page_transaction).
#[derive(Debug)]
pub struct PageTransaction<'a> {
    conn: &'a Connection,
}

impl<'a> PageTransaction<'a> {
    pub(super) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Id of any row sharing the registration OR the image URL.
    pub fn find_conflict(
        &self,
        registration: &str,
        image_url: &str,
    ) -> Result<Option<i64>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id FROM liveries WHERE registration = ?1 OR image_url = ?2 LIMIT 1",
        )?;
        let id = stmt.query_row(params![registration, image_url], |row| row.get(0)).optional()?;
        Ok(id)
    }

    /// Insert the candidate unless [`find_conflict`](Self::find_conflict) finds a match.
    pub fn insert_if_new(&self, candidate: &NewLivery) -> Result<InsertOutcome, StorageError> {
        if let Some(existing_id) = self.find_conflict(candidate.registration(), &candidate.image_url)? {
            return Ok(InsertOutcome::Skipped { existing_id });
        }

        let mut stmt = self.conn.prepare_cached(
            r#"INSERT INTO liveries (airline, registration, aircraft_model, location, image_url)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
        )?;
        stmt.execute(params![
            candidate.airline(),
            candidate.registration(),
            candidate.aircraft_model(),
            candidate.location(),
            candidate.image_url,
        ])?;
        Ok(InsertOutcome::Inserted { id: self.conn.last_insert_rowid() })
    }
}
