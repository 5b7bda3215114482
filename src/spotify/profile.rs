use futures::stream::{self, StreamExt};

use crate::{
    spotify::{
        client::{FetchError, SpotifyApi},
        recommendations::Seeds,
    },
    types::{Artist, Credential, Profile, Track},
    utils::dedupe_by,
};

/// Genre lookups allowed in flight at once.
pub const GENRE_LOOKUP_CONCURRENCY: usize = 4;

pub type ProfileResult = Result<Profile, FetchError>;

/// Builds the listening profile for one credential.
///
/// Listening history, top tracks and recommendations are load-bearing: the
/// first of them to fail becomes the result and nothing after it is
/// requested. Genre lookups only enrich the profile, so an artist whose
/// lookup fails simply contributes no genres.
///
/// Top artists are derived from the artists of the top tracks, and the
/// recommendation seeds from the first two of those artists and the first
/// three top tracks. Nothing is fetched twice and nothing is kept after the
/// call returns.
pub async fn get_profile<A>(api: &A, credential: &Credential) -> ProfileResult
where
    A: SpotifyApi + ?Sized,
{
    let history = api.listening_history(credential).await?;
    let top = api.top_tracks(credential).await?;

    let top_artists = top_artists(&top.items);
    let top_genres = top_genres(api, credential, &top_artists).await;

    let seeds = Seeds::from_top(&top.items, &top_artists);
    let recommendations = api.recommendations(credential, &seeds).await?;

    let listening_history = dedupe_by(history.items.into_iter().map(|item| item.track), |t| {
        t.id.clone()
    });
    let recommendations = dedupe_by(recommendations.tracks, |t| t.id.clone());

    Ok(Profile {
        listening_history,
        top_tracks: top.items,
        top_artists,
        top_genres,
        recommendations,
    })
}

/// Artists of `tracks` in track order, first occurrence of each id only.
pub fn top_artists(tracks: &[Track]) -> Vec<Artist> {
    dedupe_by(
        tracks.iter().flat_map(|t| t.artists.iter().cloned()),
        |a| a.id.clone(),
    )
}

/// Union of the genres of `artists`, in first-insertion order.
///
/// Lookups run concurrently but are consumed in artist order, so the
/// result does not depend on which request finishes first.
pub async fn top_genres<A>(api: &A, credential: &Credential, artists: &[Artist]) -> Vec<String>
where
    A: SpotifyApi + ?Sized,
{
    let lookups: Vec<_> = stream::iter(artists)
        .map(|artist| api.artist_genres(credential, &artist.id))
        .buffered(GENRE_LOOKUP_CONCURRENCY)
        .collect()
        .await;

    let genres = lookups
        .into_iter()
        .filter_map(Result::ok)
        .flat_map(|g| g.genres);

    dedupe_by(genres, |g| g.clone())
}
