use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use crate::{
    config,
    spotify::{
        recommendations::Seeds,
        schema::{self, Schema, ValidationError},
    },
    types::{ArtistGenres, Credential, ListeningHistory, Recommendations, TopTracks},
};

/// Failure of a Spotify read.
///
/// Only a fixed, human-readable reason reaches the caller. Status codes,
/// response bodies and validation diagnostics are logged by
/// [`SpotifyClient::fetch`] and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch listening history")]
    ListeningHistory,
    #[error("Failed to fetch top tracks")]
    TopTracks,
    #[error("Failed to fetch top genres")]
    Genres,
    #[error("Failed to fetch recommendations")]
    Recommendations,
}

/// Why a finished HTTP exchange was rejected.
#[derive(Debug, Error)]
pub enum ResponseIssue {
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("response body is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response failed validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Sorts a finished response into success, transport failure, or
/// validation failure. Pure, so it can be exercised without a server.
pub fn classify_response<T: Schema>(status: StatusCode, body: &str) -> Result<T, ResponseIssue> {
    if !status.is_success() {
        return Err(ResponseIssue::Status {
            status,
            body: body.to_string(),
        });
    }

    let raw: Value = serde_json::from_str(body)?;
    Ok(schema::validate(&raw)?)
}

/// The four Spotify reads the profile aggregator depends on.
///
/// Implemented by [`SpotifyClient`]; tests substitute in-memory doubles.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    async fn listening_history(&self, credential: &Credential)
    -> Result<ListeningHistory, FetchError>;

    async fn top_tracks(&self, credential: &Credential) -> Result<TopTracks, FetchError>;

    async fn artist_genres(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> Result<ArtistGenres, FetchError>;

    async fn recommendations(
        &self,
        credential: &Credential,
        seeds: &Seeds,
    ) -> Result<Recommendations, FetchError>;
}

/// Thin reqwest wrapper around the Spotify Web API.
///
/// Holds no credential and no cached data; every call takes the bearer
/// credential it should use.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
}

impl SpotifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at `SPOTIFY_API_URL`.
    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `path` with `segment` appended as one percent-encoded path segment.
    pub(crate) fn segment_url(&self, path: &str, segment: &str) -> Option<Url> {
        let mut url = Url::parse(&self.url(path)).ok()?;
        url.path_segments_mut().ok()?.push(segment);
        Some(url)
    }

    /// Performs one authenticated GET and validates the body against `T`.
    ///
    /// Every failure path is logged and collapsed into `reason`. No retry.
    pub async fn fetch<T: Schema>(
        &self,
        reason: FetchError,
        url: &str,
        credential: &Credential,
    ) -> Result<T, FetchError> {
        let response = match self
            .http
            .get(url)
            .bearer_auth(&credential.access_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%url, error = %err, "{}", reason);
                return Err(reason);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(%url, %status, error = %err, "{}", reason);
                return Err(reason);
            }
        };

        classify_response(status, &body).map_err(|issue| {
            tracing::warn!(%url, %issue, "{}", reason);
            reason
        })
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn listening_history(
        &self,
        credential: &Credential,
    ) -> Result<ListeningHistory, FetchError> {
        SpotifyClient::listening_history(self, credential).await
    }

    async fn top_tracks(&self, credential: &Credential) -> Result<TopTracks, FetchError> {
        SpotifyClient::top_tracks(self, credential).await
    }

    async fn artist_genres(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> Result<ArtistGenres, FetchError> {
        SpotifyClient::artist_genres(self, credential, artist_id).await
    }

    async fn recommendations(
        &self,
        credential: &Credential,
        seeds: &Seeds,
    ) -> Result<Recommendations, FetchError> {
        SpotifyClient::recommendations(self, credential, seeds).await
    }
}
