//! API types for catalog operations.
//!
//! Token exchange reuses [`AuthorizationCode`] and [`TokenGrant`] directly,
//! so the wire shape follows the accounts service.

use serde::{Deserialize, Serialize};

use crate::catalog::Track;
use crate::vibe::Vibe;

pub use crate::catalog::{AuthorizationCode, TokenGrant};

/// Request to run a set of catalog queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksRequest {
    pub access_token: String,
    pub queries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: Vec<Track>,
    pub total: usize,
}

/// Request to classify a palette and fetch matching tracks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsRequest {
    pub access_token: String,
    pub colors: Vec<[u8; 3]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub vibe: Vibe,
    pub score: i32,
    pub search_terms: Vec<String>,
    pub tracks: Vec<Track>,
}

/// Request to save tracks as a new playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub access_token: String,
    pub playlist_name: String,
    pub track_uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub success: bool,
    pub playlist_id: String,
    #[serde(default)]
    pub playlist_url: Option<String>,
    pub tracks_added: usize,
}
