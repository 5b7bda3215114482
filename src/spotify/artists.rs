use crate::{
    spotify::client::{FetchError, SpotifyClient},
    types::{ArtistGenres, Credential},
};

impl SpotifyClient {
    /// Retrieves the genres Spotify associates with a single artist.
    ///
    /// Used for enrichment only: the profile aggregator drops a failed lookup
    /// instead of failing the whole profile.
    pub async fn artist_genres(
        &self,
        credential: &Credential,
        artist_id: &str,
    ) -> Result<ArtistGenres, FetchError> {
        let Some(url) = self.segment_url("/artists", artist_id) else {
            tracing::warn!(%artist_id, "{}", FetchError::Genres);
            return Err(FetchError::Genres);
        };
        self.fetch(FetchError::Genres, url.as_str(), credential).await
    }
}
