use anyhow::Result;
use livery_http::{AppState, create_router};
use std::path::Path;
use std::sync::Arc;

use super::query::open_existing;

pub(crate) async fn run(db_path: &Path, port: u16, host: String) -> Result<()> {
    let storage = open_existing(db_path)?;
    let state = Arc::new(AppState::new(Arc::new(storage)));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
