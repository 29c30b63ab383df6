//! Shared constants for livery-scraper.
//!
//! Default crawl target, sentinels and query limits used across crates.

/// Gallery host the listing pages are fetched from.
pub const DEFAULT_BASE_URL: &str = "https://www.airliners.net";

/// Path of the special-liveries album, relative to the base URL.
/// `{page}` is replaced with the 1-based page index.
pub const LISTING_PATH_TEMPLATE: &str = "/photo-albums/view/Special-Liveries/41555?page={page}";

/// Placeholder substituted with the page number in a URL template.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Browser user agent sent with every listing request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// First page of the crawl (inclusive).
pub const DEFAULT_FIRST_PAGE: u32 = 1;

/// Last page of the crawl (inclusive).
pub const DEFAULT_LAST_PAGE: u32 = 10;

/// SQLite file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "liveries.db";

pub const UNKNOWN_AIRLINE: &str = "Unknown Airline";
pub const UNKNOWN_REGISTRATION: &str = "Unknown Registration";
pub const UNKNOWN_MODEL: &str = "Unknown Model";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Value used for every field when a card has no description block.
pub const UNKNOWN: &str = "Unknown";

/// Description used when a card has neither a description block nor alt text.
pub const NO_DESCRIPTION: &str = "No Description";

/// Marker separating the airline name from the registration.
pub const REGISTRATION_MARKER: &str = "REG:";

/// Maximum number of rows returned by any listing query.
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Default number of rows when the caller does not set a limit.
pub const DEFAULT_QUERY_LIMIT: usize = 100;
