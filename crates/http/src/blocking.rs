//! Helper for running blocking storage calls in async handlers.

use livery_storage::StorageError;
use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking storage closure on the blocking pool.
///
/// # Example
/// ```ignore
/// let storage = Arc::clone(&state.storage);
/// let stats = blocking_storage(move || storage.stats()).await?;
/// ```
pub async fn blocking_storage<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Join error: {e}")))?
        .map_err(ApiError::from)
}
