//! Crawl configuration with environment fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_DB_PATH, DEFAULT_FIRST_PAGE, DEFAULT_LAST_PAGE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, LISTING_PATH_TEMPLATE,
};
use crate::env_config::{env_parse_with_default, env_string_or};
use crate::error::{CoreError, Result};

/// Everything a scrape run needs to know besides the store handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub db_path: PathBuf,
    pub base_url: String,
    pub first_page: u32,
    pub last_page: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            base_url: DEFAULT_BASE_URL.to_owned(),
            first_page: DEFAULT_FIRST_PAGE,
            last_page: DEFAULT_LAST_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ScrapeConfig {
    /// Defaults overridden by `LIVERY_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            db_path: PathBuf::from(env_string_or("LIVERY_DB_PATH", DEFAULT_DB_PATH)),
            base_url: env_string_or("LIVERY_BASE_URL", DEFAULT_BASE_URL),
            first_page: env_parse_with_default("LIVERY_FIRST_PAGE", DEFAULT_FIRST_PAGE),
            last_page: env_parse_with_default("LIVERY_LAST_PAGE", DEFAULT_LAST_PAGE),
            timeout: Duration::from_secs(env_parse_with_default(
                "LIVERY_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Listing URL template with the page placeholder still in place.
    #[must_use]
    pub fn url_template(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LISTING_PATH_TEMPLATE)
    }

    /// Page indices to crawl, in order.
    pub fn pages(&self) -> impl Iterator<Item = u32> + use<> {
        self.first_page..=self.last_page
    }

    /// Rejects ranges and timeouts the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.first_page == 0 {
            return Err(CoreError::InvalidConfig("page numbers are 1-based".to_owned()));
        }
        if self.first_page > self.last_page {
            return Err(CoreError::InvalidConfig(format!(
                "first page {} is after last page {}",
                self.first_page, self.last_page
            )));
        }
        if self.timeout.is_zero() {
            return Err(CoreError::InvalidConfig("timeout must be non-zero".to_owned()));
        }
        if self.base_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig("base url is empty".to_owned()));
        }
        Ok(())
    }
}
