use anyhow::{anyhow, Context as _, Result};
use async_trait::async_trait;

use crate::constant::{PLAYLISTS_PAGE_LIMIT, SPOTIFY_MAX_LIMIT};
use crate::model::{Playlist, Track, User};
use crate::paging::{collect_pages, Page};

mod spotify;

#[cfg(test)]
pub(crate) mod mock;

pub use spotify::Client;

/// The Spotify Web API calls the commands are built from.
///
/// IDs are the service's opaque base-62 IDs.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Get the profile of the authenticated user
    async fn current_user(&self) -> Result<User>;

    /// Get one page of the playlists owned or followed by the authenticated user
    async fn current_user_playlists_page(&self, limit: u32, offset: u32) -> Result<Page<Playlist>>;

    /// Get one page of the tracks in a playlist
    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Track>>;

    async fn track(&self, track_id: &str) -> Result<Track>;

    /// Get the track playing on the user's active device, if any
    async fn currently_playing(&self) -> Result<Option<Track>>;

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>>;

    async fn add_tracks_to_playlist(&self, playlist_id: &str, track_ids: &[String]) -> Result<()>;

    /// Remove every occurrence of the tracks from a playlist
    async fn remove_tracks_from_playlist(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<()>;

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
        description: Option<&str>,
    ) -> Result<Playlist>;

    /// Unfollow a playlist. For a playlist the user owns this is how it gets deleted.
    async fn unfollow_playlist(&self, playlist_id: &str) -> Result<()>;
}

/// Get all playlists of the current user
pub async fn all_playlists(api: &dyn SpotifyApi) -> Result<Vec<Playlist>> {
    collect_pages(PLAYLISTS_PAGE_LIMIT, |limit, offset| {
        api.current_user_playlists_page(limit, offset)
    })
    .await
}

/// Find a playlist of the current user by its exact name
pub async fn playlist_by_name(api: &dyn SpotifyApi, name: &str) -> Result<Playlist> {
    all_playlists(api)
        .await?
        .into_iter()
        .find(|p| p.name == name)
        .ok_or_else(|| anyhow!("playlist not found: {name}"))
}

/// Get all tracks of a playlist
pub async fn all_playlist_tracks(api: &dyn SpotifyApi, playlist_id: &str) -> Result<Vec<Track>> {
    collect_pages(SPOTIFY_MAX_LIMIT, |limit, offset| {
        api.playlist_tracks_page(playlist_id, limit, offset)
    })
    .await
    .context("could not get playlist tracks")
}
