use crate::{
    spotify::client::{FetchError, SpotifyClient},
    types::{Artist, Credential, Recommendations, Track},
};

pub const MAX_SEED_ARTISTS: usize = 2;
pub const MAX_SEED_TRACKS: usize = 3;

/// Seed ids for `GET /recommendations`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seeds {
    pub artist_ids: Vec<String>,
    pub track_ids: Vec<String>,
}

impl Seeds {
    /// Takes the first two artists and the first three tracks, in order.
    pub fn from_top(tracks: &[Track], artists: &[Artist]) -> Self {
        Self {
            artist_ids: artists
                .iter()
                .take(MAX_SEED_ARTISTS)
                .map(|a| a.id.clone())
                .collect(),
            track_ids: tracks
                .iter()
                .take(MAX_SEED_TRACKS)
                .map(|t| t.id.clone())
                .collect(),
        }
    }

    pub fn query(&self) -> String {
        format!(
            "seed_artists={artists}&seed_tracks={tracks}",
            artists = self.artist_ids.join(","),
            tracks = self.track_ids.join(",")
        )
    }
}

impl SpotifyClient {
    /// Retrieves track recommendations for the given seeds.
    pub async fn recommendations(
        &self,
        credential: &Credential,
        seeds: &Seeds,
    ) -> Result<Recommendations, FetchError> {
        let url = self.url(&format!("/recommendations?{}", seeds.query()));
        self.fetch(FetchError::Recommendations, &url, credential)
            .await
    }
}
