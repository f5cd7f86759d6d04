//! Remote music catalog client
//!
//! Talks to the public Deezer API:
//! - `GET {base}/genre` for the remote genre taxonomy
//! - `GET {base}/search?q=<text>` for free-text track search
//!
//! The [`MusicCatalog`] trait is the seam handlers depend on, so tests can
//! substitute a stub without a network.

use async_trait::async_trait;
use gbr_common::{RemoteGenre, Track};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("gbr-web/", env!("CARGO_PKG_VERSION"));

/// Remote catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Remote answered with a non-success status
    #[error("Remote returned status {0}")]
    Status(u16),

    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of remote genres and tracks
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Full remote genre list
    async fn genres(&self) -> Result<Vec<RemoteGenre>, CatalogError>;

    /// Tracks matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<Track>, CatalogError>;
}

/// `GET /genre` response body
#[derive(Debug, Deserialize)]
struct GenreListResponse {
    data: Vec<RemoteGenre>,
}

/// `GET /search` response body
///
/// The API reports some failures as 200 with an `error` object and no
/// `data`; those read as an empty result. Items are decoded one by one so
/// a single malformed track does not discard the rest.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

impl SearchResponse {
    fn into_tracks(self) -> Vec<Track> {
        self.data
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Track>(item) {
                Ok(track) => Some(track),
                Err(e) => {
                    tracing::warn!("Skipping malformed search result: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Deezer public API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a client for `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, CatalogError> {
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl MusicCatalog for DeezerClient {
    async fn genres(&self) -> Result<Vec<RemoteGenre>, CatalogError> {
        let url = format!("{}/genre", self.base_url);
        tracing::debug!(url = %url, "Fetching remote genre list");

        let response = self.send(self.http_client.get(&url)).await?;
        let body: GenreListResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::info!(count = body.data.len(), "Fetched remote genre list");
        Ok(body.data)
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>, CatalogError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(url = %url, query = %query, "Searching remote tracks");

        let response = self
            .send(self.http_client.get(&url).query(&[("q", query)]))
            .await?;
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        let tracks = body.into_tracks();
        tracing::debug!(query = %query, count = tracks.len(), "Track search complete");
        Ok(tracks)
    }
}
