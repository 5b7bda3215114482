use tabled::{Table, settings::Style};

use crate::{cli::profile, info, utils, warning};

/// Shows recently played tracks, top tracks, top artists and top genres.
pub async fn stats(json: bool) {
    let profile = profile::load_profile().await;

    if json {
        profile::print_json(&profile);
        return;
    }

    info!("Recently played");
    if profile.listening_history.is_empty() {
        warning!("Nothing played recently.");
    } else {
        print_table(Table::new(utils::track_rows(&profile.listening_history)));
    }

    info!("Top tracks");
    print_table(Table::new(utils::track_rows(&profile.top_tracks)));

    info!("Top artists");
    print_table(Table::new(utils::artist_rows(&profile.top_artists)));

    info!("Top genres");
    if profile.top_genres.is_empty() {
        warning!("No genres found for your top artists.");
    } else {
        print_table(Table::new(utils::genre_rows(&profile.top_genres)));
    }
}

fn print_table(mut table: Table) {
    table.with(Style::rounded());
    println!("{}", table);
}
