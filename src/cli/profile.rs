use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    management::TokenManager,
    spotify::{self, SpotifyClient},
    types::Profile,
};

/// Builds the profile for the signed-in user or terminates with the
/// failure reason.
pub(crate) async fn load_profile() -> Profile {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!(
            "Failed to load token. Please run tunelens auth\n Error: {}",
            e
        ),
    };
    let credential = token_mgr.credential().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching listening profile...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let client = SpotifyClient::from_env();
    let result = spotify::get_profile(&client, &credential).await;
    pb.finish_and_clear();

    match result {
        Ok(profile) => profile,
        Err(e) => error!(
            "{}. Spotify data not found; run tunelens auth if your session expired, or try again.",
            e
        ),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize output: {}", e),
    }
}
