use anyhow::{Result, bail};
use livery_storage::{LiveryFilter, Storage};
use std::path::Path;

/// Opens an existing catalogue. Read commands never create one.
pub(crate) fn open_existing(db_path: &Path) -> Result<Storage> {
    if !db_path.exists() {
        bail!("database not found: {}", db_path.display());
    }
    let storage = Storage::open(db_path)?;
    if !storage.has_schema()? {
        bail!("{} has no liveries table; run `scrape` first", db_path.display());
    }
    Ok(storage)
}

pub(crate) fn run_list(
    db_path: &Path,
    airline: Option<String>,
    limit: usize,
    offset: usize,
) -> Result<()> {
    let storage = open_existing(db_path)?;
    let rows = storage.list_liveries(&LiveryFilter { airline, limit, offset })?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

pub(crate) fn run_stats(db_path: &Path) -> Result<()> {
    let storage = open_existing(db_path)?;
    let stats = storage.stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
