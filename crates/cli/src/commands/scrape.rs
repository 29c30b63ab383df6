use anyhow::{Context, Result};
use livery_core::ScrapeConfig;
use livery_service::ScrapeService;
use livery_storage::Storage;

pub(crate) async fn run(config: ScrapeConfig) -> Result<()> {
    let service = ScrapeService::http(&config)?;
    let storage = Storage::open(&config.db_path)
        .with_context(|| format!("opening {}", config.db_path.display()))?;
    storage.ensure_schema()?;

    let result = service.run(&storage, config.pages()).await;
    let report = match result {
        Ok(report) => {
            storage.close()?;
            report
        },
        Err(e) => {
            // Keep the run error; a close failure is only logged.
            if let Err(close_err) = storage.close() {
                tracing::warn!("Closing database after failed run: {close_err}");
            }
            return Err(e.into());
        },
    };

    tracing::info!(
        found = report.total_found(),
        inserted = report.total_inserted(),
        skipped = report.total_skipped(),
        failed_pages = ?report.failed_pages(),
        "Scraping complete"
    );
    Ok(())
}
