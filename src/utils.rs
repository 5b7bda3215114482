use std::{collections::HashSet, hash::Hash};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{Artist, ArtistTableRow, GenreTableRow, Track, TrackTableRow};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Drops every item whose key was already seen, keeping first occurrences
/// in their original order.
pub fn dedupe_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Turns a Spotify URI (`spotify:track:ID`) into its open.spotify.com link.
///
/// Anything that isn't a `spotify:<type>:<id>` URI is returned unchanged.
pub fn uri_to_url(uri: &str) -> String {
    let mut parts = uri.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("spotify"), Some(kind), Some(id)) => {
            format!("https://open.spotify.com/{kind}/{id}")
        }
        _ => uri.to_string(),
    }
}

pub fn genre_search_url(genre: &str) -> String {
    format!(
        "https://open.spotify.com/search/{}",
        genre.replace(' ', "%20")
    )
}

pub fn join_artist_names(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: join_artist_names(&t.artists),
            album: t.album.name.clone(),
            link: uri_to_url(&t.uri),
        })
        .collect()
}

pub fn artist_rows(artists: &[Artist]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .map(|a| ArtistTableRow {
            name: a.name.clone(),
            link: uri_to_url(&a.uri),
        })
        .collect()
}

pub fn genre_rows(genres: &[String]) -> Vec<GenreTableRow> {
    genres
        .iter()
        .map(|g| GenreTableRow {
            genre: g.clone(),
            search: genre_search_url(g),
        })
        .collect()
}
