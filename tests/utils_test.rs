use tunelens::types::{Album, Artist, Image, Track};
use tunelens::utils::*;

// Helper function to create a test artist
fn create_test_artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:artist:{}", id),
    }
}

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, artists: Vec<Artist>) -> Track {
    Track {
        album: Album {
            images: vec![Image {
                url: format!("https://i.scdn.co/image/{}", id),
            }],
            name: format!("{} (Single)", name),
            uri: format!("spotify:album:{}_album", id),
        },
        artists,
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_dedupe_by_keeps_first_occurrence_order() {
    let artist = create_test_artist("a", "Artist");
    let tracks: Vec<Track> = ["A", "B", "A", "C", "B"]
        .iter()
        .map(|id| create_test_track(id, &format!("Song {}", id), vec![artist.clone()]))
        .collect();

    let unique = dedupe_by(tracks, |t| t.id.clone());
    let ids: Vec<&str> = unique.iter().map(|t| t.id.as_str()).collect();

    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_dedupe_by_is_idempotent() {
    let input = vec![3, 1, 3, 2, 1, 1, 4, 2];

    let once = dedupe_by(input.clone(), |n| *n);
    let twice = dedupe_by(once.clone(), |n| *n);

    assert_eq!(once, vec![3, 1, 2, 4]);
    assert_eq!(once, twice);
}

#[test]
fn test_dedupe_by_keeps_first_item_not_last() {
    // Same id, different names: the first one must survive
    let first = create_test_artist("x", "First");
    let second = create_test_artist("x", "Second");

    let unique = dedupe_by(vec![first.clone(), second], |a| a.id.clone());

    assert_eq!(unique, vec![first]);
}

#[test]
fn test_dedupe_by_empty_input() {
    let unique: Vec<String> = dedupe_by(Vec::<String>::new(), |s| s.clone());
    assert!(unique.is_empty());
}

#[test]
fn test_uri_to_url() {
    assert_eq!(
        uri_to_url("spotify:track:6rqhFgbbKwnb9MLmUQDhG6"),
        "https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6"
    );
    assert_eq!(
        uri_to_url("spotify:artist:0OdUWJ0sBjDrqHygGUXeCF"),
        "https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF"
    );

    // Not a Spotify URI: returned unchanged
    assert_eq!(uri_to_url("https://example.com"), "https://example.com");
    assert_eq!(uri_to_url("spotify:track"), "spotify:track");
}

#[test]
fn test_genre_search_url() {
    assert_eq!(
        genre_search_url("indie pop"),
        "https://open.spotify.com/search/indie%20pop"
    );
    assert_eq!(genre_search_url("k-pop"), "https://open.spotify.com/search/k-pop");
}

#[test]
fn test_track_rows() {
    let track = create_test_track(
        "t1",
        "Song",
        vec![
            create_test_artist("a1", "First Artist"),
            create_test_artist("a2", "Second Artist"),
        ],
    );

    let rows = track_rows(&[track]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Song");
    assert_eq!(rows[0].artists, "First Artist, Second Artist");
    assert_eq!(rows[0].album, "Song (Single)");
    assert_eq!(rows[0].link, "https://open.spotify.com/track/t1");
}

#[test]
fn test_artist_and_genre_rows() {
    let artists = artist_rows(&[create_test_artist("a1", "Artist")]);
    assert_eq!(artists[0].name, "Artist");
    assert_eq!(artists[0].link, "https://open.spotify.com/artist/a1");

    let genres = genre_rows(&["dream pop".to_string()]);
    assert_eq!(genres[0].genre, "dream pop");
    assert_eq!(genres[0].search, "https://open.spotify.com/search/dream%20pop");
}
