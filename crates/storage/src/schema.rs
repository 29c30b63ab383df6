//! Table definition. Created when absent; never migrated.

use rusqlite::Connection;

pub const LIVERIES_TABLE: &str = "liveries";

const CREATE_LIVERIES: &str = r#"
CREATE TABLE IF NOT EXISTS liveries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    airline TEXT,
    registration TEXT,
    aircraft_model TEXT,
    location TEXT,
    image_url TEXT
)
"#;

pub fn ensure_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(CREATE_LIVERIES)?;
    tracing::debug!(table = LIVERIES_TABLE, "schema ensured");
    Ok(())
}

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n > 0)
}
