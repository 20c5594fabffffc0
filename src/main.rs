use medaid_search::{
    api::{build_router, AppState},
    config::Config,
    models::Catalog,
    search::SearchService,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize tracing
    let default_filter = format!(
        "medaid_search={},tower_http=info",
        config.observability.log_level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.observability.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting MedAid Search Service v{}", env!("CARGO_PKG_VERSION"));

    // Seed the immutable catalog
    let catalog = Arc::new(Catalog::seeded());
    tracing::info!("Catalog seeded with {} records", catalog.len());

    // Build search service and application state
    let service = SearchService::new(catalog, config.search.clone());
    let app_state = AppState::new(service);

    // Build HTTP router
    let app = build_router(app_state);

    // Start HTTP server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HTTP server listening on http://{}", addr);
    tracing::info!("   POST /api/search - Universal search");
    tracing::info!("   POST /api/search/symptoms - Search symptoms");
    tracing::info!("   POST /api/search/doctors - Search doctors");
    tracing::info!("   POST /api/search/hospitals - Search hospitals");
    tracing::info!("   POST /api/search/medicines - Search medicines");
    tracing::info!("   POST /api/search/suggestions - Autocomplete suggestions");
    tracing::info!("   GET  /api/health - Health check");

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = server => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}
