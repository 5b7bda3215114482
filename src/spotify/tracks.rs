use crate::{
    spotify::client::{FetchError, SpotifyClient},
    types::{Credential, ListeningHistory, TopTracks},
};

impl SpotifyClient {
    /// Retrieves the user's recently played tracks.
    ///
    /// Single page, as returned by `GET /me/player/recently-played`. The
    /// same track may appear more than once.
    pub async fn listening_history(
        &self,
        credential: &Credential,
    ) -> Result<ListeningHistory, FetchError> {
        let url = self.url("/me/player/recently-played");
        self.fetch(FetchError::ListeningHistory, &url, credential).await
    }

    /// Retrieves the user's top tracks (`GET /me/top/tracks`), in the order
    /// Spotify ranks them.
    pub async fn top_tracks(&self, credential: &Credential) -> Result<TopTracks, FetchError> {
        let url = self.url("/me/top/tracks");
        self.fetch(FetchError::TopTracks, &url, credential).await
    }
}
