//! An in-memory `SpotifyApi` for tests
use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Duration;

use super::SpotifyApi;
use crate::model::{Playlist, Track, User};
use crate::paging::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    PlaylistsPage { limit: u32, offset: u32 },
    TracksPage { playlist_id: String, limit: u32, offset: u32 },
    Add { playlist_id: String, track_ids: Vec<String> },
    Remove { playlist_id: String, track_ids: Vec<String> },
    Create { user_id: String, name: String, public: bool, description: Option<String> },
    Unfollow { playlist_id: String },
}

pub fn playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        owner: "me".to_string(),
        public: true,
        collaborative: false,
        total_tracks: 0,
    }
}

pub fn track(id: &str, name: &str, popularity: u32) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        album: format!("{name} (Album)"),
        artists: vec!["Artist".to_string()],
        duration: Duration::seconds(185),
        popularity,
        explicit: false,
        preview_url: None,
    }
}

pub struct MockApi {
    user: User,
    playlists: Vec<Playlist>,
    // `None` stands for an entry that is not a usable track (episode, local file)
    playlist_tracks: HashMap<String, Vec<Option<Track>>>,
    catalogue: Vec<Track>,
    playing: Option<Track>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            user: User {
                id: "me".to_string(),
                display_name: Some("Me".to_string()),
            },
            playlists: vec![],
            playlist_tracks: HashMap::new(),
            catalogue: vec![],
            playing: None,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn with_playlists(mut self, playlists: Vec<Playlist>) -> Self {
        self.playlists = playlists;
        self
    }

    pub fn with_playlist_tracks(self, playlist_id: &str, tracks: Vec<Track>) -> Self {
        self.with_playlist_entries(playlist_id, tracks.into_iter().map(Some).collect())
    }

    pub fn with_playlist_entries(mut self, playlist_id: &str, entries: Vec<Option<Track>>) -> Self {
        self.playlist_tracks.insert(playlist_id.to_string(), entries);
        self
    }

    pub fn with_catalogue(mut self, tracks: Vec<Track>) -> Self {
        self.catalogue = tracks;
        self
    }

    pub fn playing(mut self, track: Track) -> Self {
        self.playing = Some(track);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// the calls that changed something
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::PlaylistsPage { .. } | Call::TracksPage { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn page_of<T: Clone>(all: &[T], limit: u32, offset: u32) -> Vec<T> {
    all.iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl SpotifyApi for MockApi {
    async fn current_user(&self) -> Result<User> {
        Ok(self.user.clone())
    }

    async fn current_user_playlists_page(&self, limit: u32, offset: u32) -> Result<Page<Playlist>> {
        self.record(Call::PlaylistsPage { limit, offset });
        Ok(Page::new(
            page_of(&self.playlists, limit, offset),
            self.playlists.len() as u32,
        ))
    }

    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Track>> {
        self.record(Call::TracksPage {
            playlist_id: playlist_id.to_string(),
            limit,
            offset,
        });
        let entries = self
            .playlist_tracks
            .get(playlist_id)
            .ok_or_else(|| anyhow!("no playlist with id {playlist_id}"))?;
        Ok(Page::from_raw(
            page_of(entries, limit, offset),
            entries.len() as u32,
            |entry| entry,
        ))
    }

    async fn track(&self, track_id: &str) -> Result<Track> {
        self.catalogue
            .iter()
            .find(|t| t.id == track_id)
            .cloned()
            .ok_or_else(|| anyhow!("non existing id: {track_id}"))
    }

    async fn currently_playing(&self) -> Result<Option<Track>> {
        Ok(self.playing.clone())
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let query = query.to_lowercase();
        Ok(self
            .catalogue
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&query))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn add_tracks_to_playlist(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        self.record(Call::Add {
            playlist_id: playlist_id.to_string(),
            track_ids: track_ids.to_vec(),
        });
        Ok(())
    }

    async fn remove_tracks_from_playlist(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<()> {
        self.record(Call::Remove {
            playlist_id: playlist_id.to_string(),
            track_ids: track_ids.to_vec(),
        });
        Ok(())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
        description: Option<&str>,
    ) -> Result<Playlist> {
        self.record(Call::Create {
            user_id: user_id.to_string(),
            name: name.to_string(),
            public,
            description: description.map(str::to_string),
        });
        // the service often reports `public: null` for a playlist it just created
        Ok(Playlist {
            public: false,
            ..playlist("new", name)
        })
    }

    async fn unfollow_playlist(&self, playlist_id: &str) -> Result<()> {
        self.record(Call::Unfollow {
            playlist_id: playlist_id.to_string(),
        });
        Ok(())
    }
}
