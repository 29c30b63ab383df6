//! HTTP API server for livery-scraper.
//!
//! Read-only: the scrape pipeline is the only writer.

#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod blocking;
mod handlers;
#[cfg(test)]
mod tests;

use axum::{Json, Router, routing::get};
use livery_storage::Storage;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub storage: Arc<Storage>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/liveries", get(handlers::liveries::list_liveries))
        .route("/api/liveries/{id}", get(handlers::liveries::get_livery))
        .route("/api/stats", get(handlers::liveries::get_stats))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
