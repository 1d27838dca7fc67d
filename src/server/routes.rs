//! HTTP route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::types::{CatalogInfo, ConfigResponse, HealthResponse, HealthStatus, ServerInfo};

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `MessagePack` response wrapper
pub struct MsgPack<T>(pub T);

impl<T: serde::Serialize> IntoResponse for MsgPack<T> {
    fn into_response(self) -> Response {
        match rmp_serde::to_vec_named(&self.0) {
            Ok(bytes) => (
                StatusCode::OK,
                [("content-type", "application/msgpack")],
                bytes,
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize response: {e}"),
            )
                .into_response(),
        }
    }
}

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> MsgPack<HealthResponse> {
    MsgPack(HealthResponse {
        status: HealthStatus::Healthy,
        version: VERSION.to_string(),
        uptime_s: state.uptime_seconds(),
    })
}

/// Configuration endpoint
///
/// GET /api/v1/config
pub async fn config(State(state): State<AppState>) -> MsgPack<ConfigResponse> {
    let config = &state.config;

    let mut overridden_vibes: Vec<String> = config
        .search
        .overrides
        .keys()
        .filter_map(|name| name.parse::<crate::vibe::Vibe>().ok())
        .map(|vibe| vibe.name().to_string())
        .collect();
    overridden_vibes.sort();

    MsgPack(ConfigResponse {
        server: ServerInfo {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        catalog: CatalogInfo {
            api_base_url: config.catalog.api_base_url.clone(),
            market: config.catalog.market.clone(),
            search_limit: config.catalog.search_limit,
            max_tracks: config.catalog.max_tracks,
            query_delay_ms: config.catalog.query_delay_ms,
        },
        overridden_vibes,
    })
}
