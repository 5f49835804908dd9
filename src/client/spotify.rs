use std::ops::Deref;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use rspotify::{
    model::{Market, PlayableId, PlaylistId, SearchResult, SearchType, TrackId, UserId},
    prelude::*,
    AuthCodeSpotify,
};

use super::SpotifyApi;
use crate::model::{Playlist, Track, User};
use crate::paging::Page;

/// The application's Spotify client
pub struct Client {
    spotify: Arc<AuthCodeSpotify>,
}

impl Deref for Client {
    type Target = AuthCodeSpotify;
    fn deref(&self) -> &Self::Target {
        self.spotify.as_ref()
    }
}

fn parse_playlist_id(id: &str) -> Result<PlaylistId<'_>> {
    PlaylistId::from_id(id).with_context(|| format!("invalid playlist id: {id}"))
}

fn parse_track_id(id: &str) -> Result<TrackId<'_>> {
    TrackId::from_id(id).with_context(|| format!("invalid track id: {id}"))
}

fn playable_ids(ids: &[String]) -> Result<Vec<PlayableId<'_>>> {
    ids.iter()
        .map(|id| parse_track_id(id).map(PlayableId::Track))
        .collect()
}

impl Client {
    /// Construct a new client
    pub fn new(spotify: AuthCodeSpotify) -> Self {
        Self {
            spotify: Arc::new(spotify),
        }
    }
}

#[async_trait]
impl SpotifyApi for Client {
    async fn current_user(&self) -> Result<User> {
        tracing::debug!("Get current user");
        Ok(self.spotify.current_user().await?.into())
    }

    async fn current_user_playlists_page(&self, limit: u32, offset: u32) -> Result<Page<Playlist>> {
        tracing::debug!("Get current user playlists (limit={limit},offset={offset})");
        let page = self
            .spotify
            .current_user_playlists_manual(Some(limit), Some(offset))
            .await?;

        Ok(Page::new(
            page.items.into_iter().map(Playlist::from).collect(),
            page.total,
        ))
    }

    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Track>> {
        tracing::debug!("Get playlist tracks: {playlist_id} (limit={limit},offset={offset})");
        let page = self
            .spotify
            .playlist_items_manual(
                parse_playlist_id(playlist_id)?,
                None,
                None,
                Some(limit),
                Some(offset),
            )
            .await?;

        Ok(Page::from_raw(page.items, page.total, |item| {
            item.track.and_then(Track::try_from_playable_item)
        }))
    }

    async fn track(&self, track_id: &str) -> Result<Track> {
        tracing::debug!("Get track: {track_id}");
        let track = self
            .spotify
            .track(parse_track_id(track_id)?, Some(Market::FromToken))
            .await?;

        Track::try_from_full_track(track)
            .with_context(|| format!("track {track_id} is not available"))
    }

    async fn currently_playing(&self) -> Result<Option<Track>> {
        tracing::debug!("Get currently playing track");
        let playing = self
            .spotify
            .current_playing(Some(Market::FromToken), None::<Vec<_>>)
            .await?;

        Ok(playing
            .and_then(|context| context.item)
            .and_then(Track::try_from_playable_item))
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        tracing::debug!("Search tracks: {query}");
        let result = self
            .spotify
            .search(
                query,
                SearchType::Track,
                Some(Market::FromToken),
                None,
                Some(limit),
                None,
            )
            .await?;

        match result {
            SearchResult::Tracks(page) => Ok(page
                .items
                .into_iter()
                .filter_map(Track::try_from_full_track)
                .collect()),
            _ => anyhow::bail!("expect a track search result"),
        }
    }

    async fn add_tracks_to_playlist(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        tracing::debug!("Add tracks {track_ids:?} to playlist {playlist_id}");
        self.spotify
            .playlist_add_items(parse_playlist_id(playlist_id)?, playable_ids(track_ids)?, None)
            .await?;
        Ok(())
    }

    async fn remove_tracks_from_playlist(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<()> {
        tracing::debug!("Remove tracks {track_ids:?} from playlist {playlist_id}");
        self.spotify
            .playlist_remove_all_occurrences_of_items(
                parse_playlist_id(playlist_id)?,
                playable_ids(track_ids)?,
                None,
            )
            .await?;
        Ok(())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
        description: Option<&str>,
    ) -> Result<Playlist> {
        let user_id =
            UserId::from_id(user_id).with_context(|| format!("invalid user id: {user_id}"))?;
        let playlist: Playlist = self
            .spotify
            .user_playlist_create(user_id, name, Some(public), Some(false), description)
            .await?
            .into();
        tracing::info!(
            "new playlist (name={},id={}) was successfully created",
            playlist.name,
            playlist.id
        );

        Ok(playlist)
    }

    async fn unfollow_playlist(&self, playlist_id: &str) -> Result<()> {
        tracing::debug!("Unfollow playlist: {playlist_id}");
        self.spotify
            .playlist_unfollow(parse_playlist_id(playlist_id)?)
            .await?;
        Ok(())
    }
}
