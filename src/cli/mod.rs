//! # CLI Module
//!
//! User-facing commands. Each command loads what it needs, delegates to the
//! Spotify layer, and renders the result as tables or JSON.
//!
//! ## Commands
//!
//! - [`auth`] - Sign in with Spotify (OAuth 2.0 PKCE) and cache the token
//! - [`stats`] - Recently played, top tracks, top artists and top genres
//! - [`discover`] - Recommendations seeded from the top artists and tracks
//!
//! ## Data Flow
//!
//! ```text
//! TokenManager (cached token, refresh)
//!     ↓ Credential
//! spotify::get_profile
//!     ↓ Result<Profile, FetchError>
//! stats / discover (tabled or JSON)
//! ```
//!
//! `stats` and `discover` build the whole profile on every run, as the
//! original pages did; nothing is cached between runs except the token.
//! A failed profile prints its reason and exits with status 1.
//!
//! ## Usage
//!
//! ```bash
//! tunelens auth              # Sign in once
//! tunelens stats             # Listening statistics
//! tunelens discover --json   # Recommendations as JSON
//! ```

mod auth;
mod discover;
mod profile;
mod stats;

pub use auth::auth;
pub use discover::discover;
pub use stats::stats;
