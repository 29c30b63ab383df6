use livery_core::{NewLivery, ScrapeConfig, extract_candidates};
use livery_fetch::{FetchConfig, HttpFetcher, PageFetcher};
use livery_storage::{InsertOutcome, Storage};

use crate::ServiceError;
use crate::report::{PageOutcome, PageReport, ScrapeReport};

/// Runs the pipeline page by page. The store is passed in by the caller,
/// which owns opening, schema setup and closing.
pub struct ScrapeService<F> {
    fetcher: F,
}

impl ScrapeService<HttpFetcher> {
    /// Validates `config` and builds the HTTP fetcher for it.
    pub fn http(config: &ScrapeConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        let fetcher = HttpFetcher::new(FetchConfig::from(config))?;
        Ok(Self::new(fetcher))
    }
}

impl<F: PageFetcher> ScrapeService<F> {
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Process every page in order. A failed fetch is logged and recorded,
    /// then the next page is attempted; a storage error ends the run.
    pub async fn run(
        &self,
        storage: &Storage,
        pages: impl IntoIterator<Item = u32>,
    ) -> Result<ScrapeReport, ServiceError> {
        let mut report = ScrapeReport::default();
        for page in pages {
            report.pages.push(self.scrape_page(storage, page).await?);
        }
        tracing::info!(
            pages = report.pages.len(),
            found = report.total_found(),
            inserted = report.total_inserted(),
            skipped = report.total_skipped(),
            failed = report.failed_pages().len(),
            "Scrape finished"
        );
        Ok(report)
    }

    /// Fetch, extract and store one page.
    pub async fn scrape_page(&self, storage: &Storage, page: u32) -> Result<PageReport, ServiceError> {
        tracing::info!("Scraping page {page}...");

        let body = match self.fetcher.fetch_page(page).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(timeout = e.is_timeout(), "Error occurred on page {page}: {e}");
                return Ok(PageReport { page, outcome: PageOutcome::Failed { reason: e.to_string() } });
            },
        };
        tracing::info!("Page {page} retrieved successfully!");

        let candidates = extract_candidates(&body);
        tracing::info!("Found {} liveries on page {page}.", candidates.len());

        let outcome = store_candidates(storage, &candidates)?;
        Ok(PageReport { page, outcome })
    }
}

/// Dedup-insert one page's candidates inside a single transaction.
///
/// Either every insert of the page is committed or, on a storage error,
/// none is.
pub fn store_candidates(
    storage: &Storage,
    candidates: &[NewLivery],
) -> Result<PageOutcome, ServiceError> {
    storage.with_page_transaction(|tx| {
        let mut inserted = 0;
        let mut skipped = 0;
        for candidate in candidates {
            match tx.insert_if_new(candidate)? {
                InsertOutcome::Inserted { id } => {
                    inserted += 1;
                    tracing::info!(
                        id,
                        "Inserted livery: {}, Registration: {}",
                        candidate.airline(),
                        candidate.registration()
                    );
                },
                InsertOutcome::Skipped { existing_id } => {
                    skipped += 1;
                    tracing::info!(
                        existing_id,
                        "Livery with Registration {} or Image URL {} already exists.",
                        candidate.registration(),
                        candidate.image_url
                    );
                },
            }
        }
        Ok(PageOutcome::Processed { found: candidates.len(), inserted, skipped })
    })
}
