use crate::api::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/api/health", get(handlers::health_check))
        // Universal search
        .route("/api/search", post(handlers::universal_search))
        // Per-collection search
        .route("/api/search/symptoms", post(handlers::search_symptoms))
        .route("/api/search/doctors", post(handlers::search_doctors))
        .route("/api/search/hospitals", post(handlers::search_hospitals))
        .route("/api/search/medicines", post(handlers::search_medicines))
        // Autocomplete
        .route("/api/search/suggestions", post(handlers::get_suggestions))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CorsLayer::permissive())
}
