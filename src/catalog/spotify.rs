//! Spotify Web API client.

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    AuthorizationCode, CatalogError, ExternalUrls, MusicCatalog, NewPlaylist, Playlist,
    TokenGrant, Track,
};
use crate::config::CatalogConfig;

/// [`MusicCatalog`] backed by the Spotify Web API
#[derive(Clone)]
pub struct SpotifyCatalog {
    client: Client,
    api_base_url: String,
    token_url: String,
    market: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tracks: Option<TrackPage>,
}

#[derive(Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<Option<Track>>,
}

#[derive(Deserialize)]
struct UserProfile {
    id: String,
}

#[derive(Deserialize)]
struct PlaylistObject {
    id: String,
    name: String,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Serialize)]
struct AddTracksBody<'a> {
    uris: &'a [String],
}

impl SpotifyCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(concat!("vibe-playlist/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token_url: config.token_url.clone(),
            market: config.market.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Decode a success body, or turn the failure into a [`CatalogError`]
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CatalogError::InvalidResponse(e.to_string()))
}

async fn error_from_response(response: Response) -> CatalogError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });

    warn!(status = status.as_u16(), message = %message, "Catalog request failed");
    CatalogError::from_status(status.as_u16(), message, retry_after)
}

/// Pull a readable message out of an error body.
///
/// The Web API nests it as `{"error": {"message": ..}}`; the accounts
/// service uses flat OAuth fields.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    value
        .pointer("/error/message")
        .or_else(|| value.get("error_description"))
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl MusicCatalog for SpotifyCatalog {
    async fn exchange_token(&self, grant: &AuthorizationCode) -> Result<TokenGrant, CatalogError> {
        debug!(client_id = %grant.client_id, "Exchanging authorization code");

        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", grant.code.as_str()),
                ("redirect_uri", grant.redirect_uri.as_str()),
                ("client_id", grant.client_id.as_str()),
                ("code_verifier", grant.code_verifier.as_str()),
            ])
            .send()
            .await?;

        read_json(response).await
    }

    async fn search_tracks(
        &self,
        access_token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Track>, CatalogError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.url("search"))
            .bearer_auth(access_token)
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", limit.as_str()),
                ("market", self.market.as_str()),
            ])
            .send()
            .await?;

        let page: SearchResponse = read_json(response).await?;
        Ok(page
            .tracks
            .map(|t| t.items.into_iter().flatten().collect())
            .unwrap_or_default())
    }

    async fn current_user_id(&self, access_token: &str) -> Result<String, CatalogError> {
        let response = self
            .client
            .get(self.url("me"))
            .bearer_auth(access_token)
            .send()
            .await?;

        let profile: UserProfile = read_json(response).await?;
        Ok(profile.id)
    }

    async fn create_playlist(
        &self,
        access_token: &str,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<Playlist, CatalogError> {
        let response = self
            .client
            .post(self.url(&format!("users/{user_id}/playlists")))
            .bearer_auth(access_token)
            .json(playlist)
            .send()
            .await?;

        let created: PlaylistObject = read_json(response).await?;
        Ok(Playlist {
            id: created.id,
            name: created.name,
            url: created.external_urls.spotify,
        })
    }

    async fn add_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        let response = self
            .client
            .post(self.url(&format!("playlists/{playlist_id}/tracks")))
            .bearer_auth(access_token)
            .json(&AddTracksBody { uris })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}
