#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use livery_core::{LiveryFields, NewLivery};
use livery_storage::Storage;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

fn livery(airline: &str, registration: &str, url: &str) -> NewLivery {
    NewLivery::new(
        LiveryFields {
            airline: airline.to_owned(),
            registration: registration.to_owned(),
            aircraft_model: "Boeing 737-800".to_owned(),
            location: "Atlanta-USA(".to_owned(),
        },
        url,
        "",
    )
}

fn seeded_router() -> axum::Router {
    let storage = Storage::open_in_memory().unwrap();
    storage.ensure_schema().unwrap();
    storage
        .with_page_transaction(|tx| {
            tx.insert_if_new(&livery("Delta Air Lines", "N123DL", "https://img/1.jpg"))?;
            tx.insert_if_new(&livery("KLM", "PH-BXA", "https://img/2.jpg"))?;
            tx.insert_if_new(&livery("KLM", "Unknown Registration", "https://img/3.jpg"))?;
            Ok::<_, livery_storage::StorageError>(())
        })
        .unwrap();
    create_router(Arc::new(AppState::new(Arc::new(storage))))
}

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get_json(seeded_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_returns_rows_in_insertion_order() {
    let (status, body) = get_json(seeded_router(), "/api/liveries").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["airline"], "Delta Air Lines");
    assert_eq!(rows[0]["image_url"], "https://img/1.jpg");
}

#[tokio::test]
async fn list_filters_by_airline_and_paginates() {
    let (_, body) = get_json(seeded_router(), "/api/liveries?airline=KLM&limit=1&offset=1").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["registration"], "Unknown Registration");
}

#[tokio::test]
async fn get_by_id_and_missing_id() {
    let (status, body) = get_json(seeded_router(), "/api/liveries/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["registration"], "PH-BXA");

    let (status, body) = get_json(seeded_router(), "/api/liveries/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn stats_summarises_catalogue() {
    let (status, body) = get_json(seeded_router(), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["airlines"], 2);
    assert_eq!(body["unknown_registrations"], 1);
}

#[tokio::test]
async fn missing_schema_is_internal_error() {
    let storage = Storage::open_in_memory().unwrap();
    let router = create_router(Arc::new(AppState::new(Arc::new(storage))));
    let (status, body) = get_json(router, "/api/stats").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}
