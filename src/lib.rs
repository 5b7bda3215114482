//! tunelens library
//!
//! Signs in with a Spotify account and builds a listening profile from the
//! Spotify Web API: recently played tracks, top tracks, top artists, top
//! genres and recommendations, combined into one result per run.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token persistence and refresh
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client and profile aggregation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tunelens::{spotify, types::Credential};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = spotify::SpotifyClient::from_env();
//!     let credential = Credential::new("BQC...");
//!     match spotify::get_profile(&client, &credential).await {
//!         Ok(profile) => println!("{} top tracks", profile.top_tracks.len()),
//!         Err(reason) => eprintln!("{}", reason),
//!     }
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed-error result for CLI plumbing where the concrete error type
/// does not matter. Library code uses typed errors such as
/// [`spotify::FetchError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue `o` bullet.
///
/// ```
/// info!("Fetching listening profile...");
/// info!("Found {} top tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red `!` and exits with status 1.
///
/// Evaluates to `!`, so it can end a `match` arm of any type. Reserved for
/// the CLI layer; library code returns errors instead.
///
/// ```
/// let token = match TokenManager::load().await {
///     Ok(t) => t,
///     Err(e) => error!("Failed to load token: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning with a yellow `!` and carries on.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
