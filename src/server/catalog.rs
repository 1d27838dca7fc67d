//! Catalog route handlers: token exchange, search, recommendations and
//! playlist creation.

use axum::extract::State;
use tracing::{error, info};

use crate::catalog::{self, CatalogError};
use crate::error::AppError;
use crate::types::{
    to_samples, AuthorizationCode, CreatePlaylistRequest, CreatePlaylistResponse,
    RecommendationsRequest, RecommendationsResponse, SearchTracksRequest, SearchTracksResponse,
    TokenGrant,
};
use crate::vibe::analyze_palette;

use super::extractors::MsgPackExtractor;
use super::routes::MsgPack;
use super::AppState;

fn require_token(access_token: &str) -> Result<(), AppError> {
    if access_token.trim().is_empty() {
        return Err(AppError::BadRequest("Missing access_token".to_string()));
    }
    Ok(())
}

/// Log a failed catalog operation before handing it to the error response
fn catalog_failure(operation: &'static str) -> impl Fn(CatalogError) -> AppError {
    move |err| {
        error!(operation, error = %err, "Catalog operation failed");
        AppError::from(err)
    }
}

/// POST /api/v1/auth/exchange-token
///
/// Exchange a PKCE authorization code for an access token.
pub async fn exchange_token(
    State(state): State<AppState>,
    MsgPackExtractor(req): MsgPackExtractor<AuthorizationCode>,
) -> Result<MsgPack<TokenGrant>, AppError> {
    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    info!(client_id = %req.client_id, "Token exchange requested");

    let grant = state
        .catalog
        .exchange_token(&req)
        .await
        .map_err(catalog_failure("exchange_token"))?;

    info!(expires_in = grant.expires_in, "Token exchange succeeded");
    Ok(MsgPack(grant))
}

/// POST /api/v1/tracks/search
///
/// Run the given queries in order and return de-duplicated tracks.
pub async fn search_tracks(
    State(state): State<AppState>,
    MsgPackExtractor(req): MsgPackExtractor<SearchTracksRequest>,
) -> Result<MsgPack<SearchTracksResponse>, AppError> {
    require_token(&req.access_token)?;

    let queries: Vec<String> = req
        .queries
        .iter()
        .map(|q| q.trim())
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect();

    info!(queries = queries.len(), "Searching tracks");

    let tracks = catalog::collect_tracks(
        state.catalog.as_ref(),
        &req.access_token,
        &queries,
        &state.collect_options(),
    )
    .await
    .map_err(catalog_failure("search_tracks"))?;

    info!(tracks = tracks.len(), "Track search complete");

    Ok(MsgPack(SearchTracksResponse {
        total: tracks.len(),
        tracks,
    }))
}

/// POST /api/v1/recommendations
///
/// Classify a palette, then search the catalog with the winning vibe's terms.
pub async fn recommendations(
    State(state): State<AppState>,
    MsgPackExtractor(req): MsgPackExtractor<RecommendationsRequest>,
) -> Result<MsgPack<RecommendationsResponse>, AppError> {
    require_token(&req.access_token)?;

    let analysis = analyze_palette(&to_samples(&req.colors))?;
    let search_terms = state.search_terms.terms_for(analysis.vibe).to_vec();

    info!(
        vibe = %analysis.vibe,
        score = analysis.score,
        queries = search_terms.len(),
        "Fetching recommendations"
    );

    let tracks = catalog::collect_tracks(
        state.catalog.as_ref(),
        &req.access_token,
        &search_terms,
        &state.collect_options(),
    )
    .await
    .map_err(catalog_failure("recommendations"))?;

    Ok(MsgPack(RecommendationsResponse {
        vibe: analysis.vibe,
        score: analysis.score,
        search_terms,
        tracks,
    }))
}

/// POST /api/v1/playlists
///
/// Create a private playlist for the token's owner.
pub async fn create_playlist(
    State(state): State<AppState>,
    MsgPackExtractor(req): MsgPackExtractor<CreatePlaylistRequest>,
) -> Result<MsgPack<CreatePlaylistResponse>, AppError> {
    require_token(&req.access_token)?;

    info!(
        name = %req.playlist_name,
        tracks = req.track_uris.len(),
        "Creating playlist"
    );

    let created = catalog::build_playlist(
        state.catalog.as_ref(),
        &req.access_token,
        &req.playlist_name,
        &req.track_uris,
    )
    .await
    .map_err(catalog_failure("create_playlist"))?;

    Ok(MsgPack(CreatePlaylistResponse {
        success: true,
        playlist_id: created.playlist.id,
        playlist_url: created.playlist.url,
        tracks_added: created.tracks_added,
    }))
}
