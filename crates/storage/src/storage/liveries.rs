use livery_core::{
    DEFAULT_QUERY_LIMIT, LiveryRecord, LiveryStats, MAX_QUERY_LIMIT, UNKNOWN_REGISTRATION,
};
use rusqlite::{OptionalExtension, params};
use serde::Deserialize;

use super::{Storage, lock_conn, log_row_error};
use crate::error::StorageError;

const SELECT_COLUMNS: &str =
    "SELECT id, airline, registration, aircraft_model, location, image_url FROM liveries";

const fn default_limit() -> usize {
    DEFAULT_QUERY_LIMIT
}

/// Filter and paging for [`Storage::list_liveries`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LiveryFilter {
    /// Exact airline match.
    pub airline: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl Default for LiveryFilter {
    fn default() -> Self {
        Self { airline: None, limit: DEFAULT_QUERY_LIMIT, offset: 0 }
    }
}

impl LiveryFilter {
    /// Cap limit to prevent unbounded queries.
    pub fn capped_limit(&self) -> usize {
        self.limit.min(MAX_QUERY_LIMIT)
    }
}

/// Columns may be NULL in files written by other tools; they read as "".
fn map_livery(row: &rusqlite::Row<'_>) -> rusqlite::Result<LiveryRecord> {
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };
    Ok(LiveryRecord {
        id: row.get(0)?,
        airline: text(1)?,
        registration: text(2)?,
        aircraft_model: text(3)?,
        location: text(4)?,
        image_url: text(5)?,
    })
}

fn to_count(value: i64, context: &str) -> Result<u64, StorageError> {
    u64::try_from(value).map_err(|e| StorageError::DataCorruption {
        context: format!("negative {context}: {value}"),
        source: Box::new(e),
    })
}

impl Storage {
    /// Records in insertion order.
    pub fn list_liveries(&self, filter: &LiveryFilter) -> Result<Vec<LiveryRecord>, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let limit = filter.capped_limit() as i64;
        // Offsets past i64::MAX would wrap negative, which SQLite reads as 0.
        let offset = i64::try_from(filter.offset).unwrap_or(i64::MAX);

        let results: Vec<LiveryRecord> = if let Some(airline) = filter.airline.as_deref() {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_COLUMNS} WHERE airline = ?1 ORDER BY id LIMIT ?2 OFFSET ?3"
            ))?;
            let rows = stmt
                .query_map(params![airline, limit, offset], map_livery)?
                .filter_map(log_row_error)
                .collect();
            rows
        } else {
            let mut stmt =
                conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id LIMIT ?1 OFFSET ?2"))?;
            let rows =
                stmt.query_map(params![limit, offset], map_livery)?.filter_map(log_row_error).collect();
            rows
        };
        Ok(results)
    }

    pub fn get_livery(&self, id: i64) -> Result<Option<LiveryRecord>, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
        let record = stmt.query_row(params![id], map_livery).optional()?;
        Ok(record)
    }

    pub fn count_liveries(&self) -> Result<u64, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM liveries", [], |row| row.get(0))?;
        to_count(total, "row count")
    }

    pub fn stats(&self) -> Result<LiveryStats, StorageError> {
        let conn = lock_conn(&self.conn)?;
        let (total, airlines, unknown): (i64, i64, i64) = conn.query_row(
            r#"SELECT COUNT(*),
                      COUNT(DISTINCT airline),
                      COALESCE(SUM(CASE WHEN registration = ?1 THEN 1 ELSE 0 END), 0)
               FROM liveries"#,
            params![UNKNOWN_REGISTRATION],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        Ok(LiveryStats {
            total: to_count(total, "row count")?,
            airlines: to_count(airlines, "airline count")?,
            unknown_registrations: to_count(unknown, "unknown registration count")?,
        })
    }
}
