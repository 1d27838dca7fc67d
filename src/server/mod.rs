//! HTTP server setup and routing.

mod catalog;
mod extractors;
mod routes;
mod vibe;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::{CollectOptions, MusicCatalog};
use crate::config::AppConfig;
use crate::vibe::SearchTermTable;

pub use extractors::MsgPackExtractor;
pub use routes::MsgPack;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Remote music catalog
    pub catalog: Arc<dyn MusicCatalog>,
    /// Validated search terms for every vibe
    pub search_terms: Arc<SearchTermTable>,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        catalog: Arc<dyn MusicCatalog>,
        search_terms: SearchTermTable,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            search_terms: Arc::new(search_terms),
            started_at: Instant::now(),
        }
    }

    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions::from(&self.config.catalog)
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Classification endpoints
        .route("/vibe/classify", post(vibe::classify))
        .route("/vibe/list", get(vibe::list_vibes))
        .route("/vibe/:vibe/queries", get(vibe::vibe_queries))
        // Catalog endpoints
        .route("/auth/exchange-token", post(catalog::exchange_token))
        .route("/tracks/search", post(catalog::search_tracks))
        .route("/recommendations", post(catalog::recommendations))
        .route("/playlists", post(catalog::create_playlist));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
