//! Music catalog access.
//!
//! The service talks to the catalog through the [`MusicCatalog`] trait:
//! - [`SpotifyCatalog`] is the HTTP implementation used in production
//! - tests substitute in-memory fakes
//!
//! [`collect_tracks`] and [`build_playlist`] hold the multi-request flows
//! (de-duplicated search across queries, chunked playlist creation) so they
//! behave the same no matter which backend is plugged in.

mod model;
mod spotify;

pub use model::{
    Album, Artist, AuthorizationCode, ExternalUrls, Image, NewPlaylist, Playlist, TokenGrant,
    Track,
};
pub use spotify::SpotifyCatalog;

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;

/// Description attached to every playlist the service creates
pub const PLAYLIST_DESCRIPTION: &str = "Created by Vibe Analyzer App";

/// Most track URIs the catalog accepts in one add request
pub const MAX_URIS_PER_REQUEST: usize = 100;

/// Error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Access token rejected: {0}")]
    Unauthorized(String),

    #[error("Operation not permitted: {0}")]
    Forbidden(String),

    #[error("Rate limited by the catalog")]
    RateLimited { retry_after: Option<u64> },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Catalog unreachable: {0}")]
    Network(String),

    #[error("Catalog returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected catalog response: {0}")]
    InvalidResponse(String),
}

impl CatalogError {
    /// Map a non-success HTTP status onto an error kind
    pub fn from_status(status: u16, message: String, retry_after: Option<u64>) -> Self {
        match status {
            400 => Self::InvalidRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimited { retry_after },
            _ => Self::Api { status, message },
        }
    }

    /// Fatal errors affect every following request with the same token,
    /// so multi-request flows stop instead of skipping ahead
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_) | Self::Forbidden(_) | Self::RateLimited { .. }
        )
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Trait for music catalog backends
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Exchange an authorization code for an access token
    async fn exchange_token(&self, grant: &AuthorizationCode) -> Result<TokenGrant, CatalogError>;

    /// Search tracks matching a free-text query
    async fn search_tracks(
        &self,
        access_token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Track>, CatalogError>;

    /// Id of the user owning the access token
    async fn current_user_id(&self, access_token: &str) -> Result<String, CatalogError>;

    /// Create an empty playlist owned by `user_id`
    async fn create_playlist(
        &self,
        access_token: &str,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<Playlist, CatalogError>;

    /// Append tracks to a playlist. Callers keep batches within
    /// [`MAX_URIS_PER_REQUEST`].
    async fn add_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError>;
}

/// Limits applied when collecting tracks across several queries
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Tracks requested per query
    pub per_query_limit: u32,
    /// Tracks kept after de-duplication
    pub max_tracks: usize,
    /// Pause between consecutive queries
    pub query_delay: Duration,
}

impl From<&CatalogConfig> for CollectOptions {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            per_query_limit: config.search_limit,
            max_tracks: config.max_tracks,
            query_delay: config.query_delay(),
        }
    }
}

/// Run every query in order and merge the results.
///
/// Tracks without an id or URI are dropped and the first occurrence of each
/// id wins. Stops early once `max_tracks` are collected. A failed query is
/// skipped unless the error is fatal; if every query fails the last error is
/// returned.
pub async fn collect_tracks(
    catalog: &dyn MusicCatalog,
    access_token: &str,
    queries: &[String],
    options: &CollectOptions,
) -> Result<Vec<Track>, CatalogError> {
    let mut tracks = Vec::new();
    let mut seen = HashSet::new();
    let mut succeeded = 0usize;
    let mut last_error = None;

    for (index, query) in queries.iter().enumerate() {
        if tracks.len() >= options.max_tracks {
            break;
        }
        if index > 0 && !options.query_delay.is_zero() {
            tokio::time::sleep(options.query_delay).await;
        }

        debug!(query = %query, index = index + 1, total = queries.len(), "Searching catalog");

        match catalog
            .search_tracks(access_token, query, options.per_query_limit)
            .await
        {
            Ok(found) => {
                succeeded += 1;
                for track in found {
                    let Some(id) = track.id.clone() else { continue };
                    if track.uri.is_some() && seen.insert(id) {
                        tracks.push(track);
                    }
                }
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                warn!(query = %query, error = %err, "Search query failed, skipping");
                last_error = Some(err);
            }
        }
    }

    if succeeded == 0 {
        if let Some(err) = last_error {
            return Err(err);
        }
    }

    tracks.truncate(options.max_tracks);
    Ok(tracks)
}

/// Outcome of [`build_playlist`]
#[derive(Debug, Clone)]
pub struct CreatedPlaylist {
    pub playlist: Playlist,
    pub tracks_added: usize,
}

/// Create a private playlist for the token's owner and fill it.
///
/// Tracks are added in order, in batches of [`MAX_URIS_PER_REQUEST`]. The
/// first failed request aborts the flow; a playlist created before the
/// failure is left in place.
pub async fn build_playlist(
    catalog: &dyn MusicCatalog,
    access_token: &str,
    name: &str,
    track_uris: &[String],
) -> Result<CreatedPlaylist, CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::InvalidRequest(
            "Playlist name must not be empty".to_string(),
        ));
    }
    if track_uris.is_empty() {
        return Err(CatalogError::InvalidRequest(
            "At least one track URI is required".to_string(),
        ));
    }

    let user_id = catalog.current_user_id(access_token).await?;

    let details = NewPlaylist {
        name: name.to_string(),
        description: PLAYLIST_DESCRIPTION.to_string(),
        public: false,
    };
    let playlist = catalog
        .create_playlist(access_token, &user_id, &details)
        .await?;

    for batch in track_uris.chunks(MAX_URIS_PER_REQUEST) {
        catalog.add_tracks(access_token, &playlist.id, batch).await?;
    }

    info!(
        playlist_id = %playlist.id,
        tracks = track_uris.len(),
        "Created playlist"
    );

    Ok(CreatedPlaylist {
        playlist,
        tracks_added: track_uris.len(),
    })
}
