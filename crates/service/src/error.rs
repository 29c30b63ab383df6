//! Typed error enum for the service layer.
//!
//! Unifies storage, fetch and configuration failures so the binary can
//! report them without downcasting.

use livery_core::CoreError;
use livery_fetch::FetchError;
use livery_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage, fetch and config failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed. Ends the run.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Fetcher could not be constructed. Per-page fetch failures are
    /// reported in the page outcome instead.
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    /// Run configuration rejected before any request was made.
    #[error("config: {0}")]
    Config(#[from] CoreError),
}
