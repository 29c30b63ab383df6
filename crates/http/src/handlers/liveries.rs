use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use livery_core::{LiveryRecord, LiveryStats};
use livery_storage::LiveryFilter;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking_storage;

pub async fn list_liveries(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<LiveryFilter>,
) -> Result<Json<Vec<LiveryRecord>>, ApiError> {
    let storage = Arc::clone(&state.storage);
    blocking_storage(move || storage.list_liveries(&filter)).await.map(Json)
}

pub async fn get_livery(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<LiveryRecord>, ApiError> {
    let storage = Arc::clone(&state.storage);
    blocking_storage(move || storage.get_livery(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("livery '{id}' not found")))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LiveryStats>, ApiError> {
    let storage = Arc::clone(&state.storage);
    blocking_storage(move || storage.stats()).await.map(Json)
}
