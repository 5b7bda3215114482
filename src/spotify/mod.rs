//! # Spotify Integration Module
//!
//! Everything tunelens knows about the Spotify Web API: signing in, reading
//! the four endpoints the listening profile is built from, validating what
//! comes back, and combining it into one [`crate::types::Profile`].
//!
//! ## Architecture
//!
//! ```text
//! CLI (stats, discover)
//!          ↓
//! profile::get_profile          (orchestration, dedupe, partial failure)
//!          ↓
//! SpotifyApi / SpotifyClient    (tracks, artists, recommendations)
//!          ↓
//! SpotifyClient::fetch          (one GET, bearer auth, logging)
//!          ↓
//! schema::validate              (typed parsing with field paths)
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE sign-in, code exchange and token refresh
//! - [`client`] - [`client::SpotifyClient`], the [`client::SpotifyApi`]
//!   trait, and the fetch-and-validate wrapper with [`client::FetchError`]
//! - [`schema`] - Shape validation for every payload the profile reads
//! - [`profile`] - The aggregator producing [`profile::ProfileResult`]
//! - `tracks`, `artists`, [`recommendations`] - One accessor per endpoint
//!
//! ## Endpoints
//!
//! | Purpose | Request | Shape |
//! |---|---|---|
//! | Recently played | `GET /me/player/recently-played` | `{ items: [{ track }] }` |
//! | Top tracks | `GET /me/top/tracks` | `{ items: [track] }` |
//! | Artist | `GET /artists/{id}` | `{ genres: [string] }` |
//! | Recommendations | `GET /recommendations?seed_artists&seed_tracks` | `{ tracks: [track] }` |
//!
//! Only the first page of each endpoint is read.
//!
//! ## Error Handling
//!
//! Every read returns `Result<T, FetchError>`. Transport errors, non-2xx
//! statuses and malformed bodies are logged through `tracing` with their
//! details and reported to the caller as a fixed reason only. Nothing is
//! retried; rerunning the command is the retry.
//!
//! Listening history, top tracks and recommendations fail the whole
//! profile. Artist genre lookups never do.

pub mod artists;
pub mod auth;
pub mod client;
pub mod profile;
pub mod recommendations;
pub mod schema;
pub mod tracks;

pub use client::{FetchError, SpotifyApi, SpotifyClient};
pub use profile::{ProfileResult, get_profile};
