use std::time::Duration;

use async_trait::async_trait;
use livery_core::{PAGE_PLACEHOLDER, ScrapeConfig};

use crate::error::FetchError;

/// Source of raw listing-page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch page `page` (1-based) and return the body bytes.
    async fn fetch_page(&self, page: u32) -> Result<Vec<u8>, FetchError>;
}

/// Request settings for [`HttpFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// URL with a `{page}` placeholder.
    pub url_template: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl FetchConfig {
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        self.url_template.replace(PAGE_PLACEHOLDER, &page.to_string())
    }
}

impl From<&ScrapeConfig> for FetchConfig {
    fn from(config: &ScrapeConfig) -> Self {
        Self {
            url_template: config.url_template(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }
}

/// reqwest-backed fetcher.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, page: u32) -> Result<Vec<u8>, FetchError> {
        let url = self.config.page_url(page);
        tracing::debug!(page, url = %url, "GET listing page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { code: status.as_u16(), url });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
