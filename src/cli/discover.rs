use tabled::{Table, settings::Style};

use crate::{cli::profile, info, success, utils, warning};

/// Shows tracks recommended from the user's top artists and tracks.
pub async fn discover(json: bool) {
    let profile = profile::load_profile().await;

    if json {
        profile::print_json(&profile.recommendations);
        return;
    }

    if profile.recommendations.is_empty() {
        warning!("Spotify returned no recommendations.");
        return;
    }

    info!("Based on your listening habits, here are some tracks you might like.");
    let mut table = Table::new(utils::track_rows(&profile.recommendations));
    table.with(Style::rounded());
    println!("{}", table);
    success!("{} recommendations", profile.recommendations.len());
}
