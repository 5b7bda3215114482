//! # API Module
//!
//! HTTP endpoints served by the temporary local server that `tunelens auth`
//! starts while the user signs in with Spotify.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the OAuth redirect from Spotify, exchanges the
//!   authorization code and PKCE verifier for a token, and hands the token
//!   to the waiting auth flow through shared state.
//! - [`health`] - Reports service name, status and version.
//!
//! The router itself lives in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
