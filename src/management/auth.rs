use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use crate::{
    config, spotify,
    types::{Credential, Token},
};

/// Refresh this many seconds before Spotify would reject the token.
const EXPIRY_MARGIN_SECS: u64 = 240;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token cache unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("token cache is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Owns the OAuth token between runs and hands out fresh credentials.
///
/// The profile aggregator never sees the refresh token; it only receives a
/// [`Credential`] built from the current access token.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, TokenError> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), TokenError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns a credential for the current access token, refreshing it
    /// first when it is about to expire. A failed refresh keeps the old
    /// token; the next Spotify call will then report the failure.
    pub async fn credential(&mut self) -> Credential {
        if self.is_expired(Utc::now().timestamp() as u64) {
            match spotify::auth::refresh_token(&self.token.refresh_token).await {
                Ok(mut new_token) => {
                    if new_token.refresh_token.is_empty() {
                        new_token.refresh_token = self.token.refresh_token.clone();
                    }
                    self.token = new_token;
                    if let Err(e) = self.persist().await {
                        tracing::warn!(error = %e, "failed to persist refreshed token");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "token refresh failed"),
            }
        }

        Credential::new(self.token.access_token.clone())
    }

    fn is_expired(&self, now: u64) -> bool {
        let expires_at = self.token.obtained_at + self.token.expires_in;
        now >= expires_at.saturating_sub(EXPIRY_MARGIN_SECS)
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}
