use crate::api::AppState;
use crate::error::Result;
use crate::models::{Category, Collection};
use crate::search::{ScoredResult, Suggestion};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "MedAid Search Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Universal search across all categories
pub async fn universal_search(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchEnvelope>> {
    let Json(request) = payload?;
    request.validate()?;

    let query = request.query.trim().to_string();
    if query.is_empty() {
        return Err(crate::error::AppError::Validation(
            "Query parameter is required".to_string(),
        ));
    }

    let limit = request
        .limit
        .unwrap_or(state.search.options().default_limit);

    let outcome = state.search.search(&query, request.category, limit);

    Ok(Json(SearchEnvelope {
        success: true,
        query,
        category: request.category,
        total_results: outcome.total_results,
        timestamp: Utc::now(),
        results: outcome.results,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, message = "Query parameter is required"))]
    pub query: String,

    #[serde(default)]
    pub category: Category,

    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchEnvelope {
    pub success: bool,
    pub query: String,
    pub category: Category,
    pub total_results: usize,
    pub timestamp: DateTime<Utc>,
    pub results: BTreeMap<&'static str, Vec<ScoredResult>>,
}

/// Search specifically for symptoms
pub async fn search_symptoms(
    state: State<AppState>,
    payload: std::result::Result<Json<CollectionSearchRequest>, JsonRejection>,
) -> Result<Json<CollectionSearchResponse>> {
    collection_search(state, Collection::Symptoms, payload)
}

/// Search specifically for doctors
pub async fn search_doctors(
    state: State<AppState>,
    payload: std::result::Result<Json<CollectionSearchRequest>, JsonRejection>,
) -> Result<Json<CollectionSearchResponse>> {
    collection_search(state, Collection::Doctors, payload)
}

/// Search specifically for hospitals
pub async fn search_hospitals(
    state: State<AppState>,
    payload: std::result::Result<Json<CollectionSearchRequest>, JsonRejection>,
) -> Result<Json<CollectionSearchResponse>> {
    collection_search(state, Collection::Hospitals, payload)
}

/// Search specifically for medicines
pub async fn search_medicines(
    state: State<AppState>,
    payload: std::result::Result<Json<CollectionSearchRequest>, JsonRejection>,
) -> Result<Json<CollectionSearchResponse>> {
    collection_search(state, Collection::Medicines, payload)
}

/// Shared implementation for the per-collection routes.
///
/// These routes accept a blank query (the result set is simply empty) and
/// apply no truncation, mirroring the universal route's semantics minus the
/// required-query guard and limit.
fn collection_search(
    State(state): State<AppState>,
    collection: Collection,
    payload: std::result::Result<Json<CollectionSearchRequest>, JsonRejection>,
) -> Result<Json<CollectionSearchResponse>> {
    let Json(request) = payload?;

    let results = state.search.rank_collection(&request.query, collection);

    Ok(Json(CollectionSearchResponse {
        success: true,
        count: results.len(),
        results,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CollectionSearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct CollectionSearchResponse {
    pub success: bool,
    pub results: Vec<ScoredResult>,
    pub count: usize,
}

/// Autocomplete suggestions
pub async fn get_suggestions(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SuggestionsRequest>, JsonRejection>,
) -> Result<Json<SuggestionsResponse>> {
    let Json(request) = payload?;

    let limit = request
        .limit
        .unwrap_or(state.search.options().suggestion_limit);

    let suggestions = state.search.suggest(&request.query, limit);

    Ok(Json(SuggestionsResponse {
        success: true,
        suggestions,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub query: String,

    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub suggestions: Vec<Suggestion>,
}
