use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Bearer credential handed to the profile aggregator for a single call.
///
/// Owned by the session layer ([`crate::management::TokenManager`]); the
/// Spotify client only reads it to build the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl Credential {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub images: Vec<Image>,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub album: Album,
    pub artists: Vec<Artist>,
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayHistoryItem {
    pub track: Track,
}

/// Page returned by `GET /me/player/recently-played`. May repeat tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListeningHistory {
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopTracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistGenres {
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub tracks: Vec<Track>,
}

/// Combined result of one profile aggregation.
///
/// `listening_history` and `top_artists` are deduplicated by id,
/// `top_tracks` is kept exactly as Spotify returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub listening_history: Vec<Track>,
    pub top_tracks: Vec<Track>,
    pub top_artists: Vec<Artist>,
    pub top_genres: Vec<String>,
    pub recommendations: Vec<Track>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub link: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub link: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub search: String,
}
