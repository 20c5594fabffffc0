//! HTTP surface tests driven through the router with `tower::ServiceExt`

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use medaid_search::api::{build_router, AppState};
use medaid_search::config::SearchOptions;
use medaid_search::models::Catalog;
use medaid_search::search::SearchService;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to build the router over the seeded catalog
fn test_app() -> Router {
    let service = SearchService::new(Arc::new(Catalog::seeded()), SearchOptions::default());
    build_router(AppState::new(service))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "MedAid Search Service");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_universal_search_envelope() {
    let (status, body) = post_json(
        test_app(),
        "/api/search",
        json!({"query": "fever", "category": "all", "limit": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "fever");
    assert_eq!(body["category"], "all");
    assert!(body["timestamp"].is_string());

    let results = body["results"].as_object().unwrap();
    for key in [
        "symptoms",
        "doctors",
        "hospitals",
        "medicines",
        "health_records",
    ] {
        assert!(results.contains_key(key), "missing {key}");
    }

    let total: usize = results.values().map(|v| v.as_array().unwrap().len()).sum();
    assert_eq!(body["total_results"], total);

    // Fever must surface in symptoms with score and matched field attached.
    let symptoms = results["symptoms"].as_array().unwrap();
    let fever = symptoms
        .iter()
        .find(|r| r["name"] == "Fever")
        .expect("Fever hit missing");
    assert!(fever["relevance_score"].as_f64().unwrap() > 30.0);
    assert_eq!(fever["matched_field"], "name");
}

#[tokio::test]
async fn test_category_filter_returns_single_key() {
    let (status, body) = post_json(
        test_app(),
        "/api/search",
        json!({"query": "metformin", "category": "records"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_object().unwrap();
    assert_eq!(results.len(), 1);
    assert!(results.contains_key("health_records"));
}

#[tokio::test]
async fn test_missing_query_is_rejected() {
    let (status, body) = post_json(test_app(), "/api/search", json!({"category": "all"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_blank_query_is_rejected() {
    let (status, body) = post_json(test_app(), "/api/search", json!({"query": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Query parameter is required"));
}

#[tokio::test]
async fn test_malformed_json_is_rejected_gracefully() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let (status, body) = post_json(
        test_app(),
        "/api/search",
        json!({"query": "fever", "category": "potions"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_collection_route_allows_blank_query() {
    let (status, body) = post_json(test_app(), "/api/search/symptoms", json!({"query": ""})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_collection_route_returns_ranked_hits() {
    let (status, body) = post_json(
        test_app(),
        "/api/search/doctors",
        json!({"query": "cardiologist"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(body["count"], results.len());
    assert_eq!(results[0]["name"], "Dr. Rajesh Kumar");
    assert_eq!(results[0]["matched_field"], "specialty");
}

#[tokio::test]
async fn test_suggestions_endpoint() {
    let (status, body) = post_json(
        test_app(),
        "/api/search/suggestions",
        json!({"query": "dr", "limit": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(suggestions.len() <= 5);
    assert!(suggestions
        .iter()
        .any(|s| s["text"].as_str().unwrap().contains("Rajesh Kumar")
            && s["category"] == "Doctor"));
}

#[tokio::test]
async fn test_suggestions_default_limit() {
    // Empty query matches every scanned record; the default limit caps it.
    let (status, body) = post_json(test_app(), "/api/search/suggestions", json!({"query": ""})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
}
