//! Playlist, track and user data as the commands see them
use chrono::Duration;
use rspotify::{model as rspotify_model, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub public: bool,
    pub collaborative: bool,
    pub total_tracks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub album: String,
    pub artists: Vec<String>,
    pub duration: Duration,
    pub popularity: u32,
    pub explicit: bool,
    pub preview_url: Option<String>,
}

impl Track {
    /// Tracks without an ID (local files, unavailable tracks) are dropped.
    ///
    /// A relinked track keeps the ID of the originally requested track, which is
    /// the one stored in the playlist.
    pub fn try_from_full_track(track: rspotify_model::FullTrack) -> Option<Self> {
        let id = track.linked_from.and_then(|link| link.id).or(track.id)?;
        Some(Self {
            id: id.id().to_string(),
            name: track.name,
            album: track.album.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            duration: track.duration,
            popularity: track.popularity,
            explicit: track.explicit,
            preview_url: track.preview_url,
        })
    }

    /// Only tracks are kept, podcast episodes are skipped
    pub fn try_from_playable_item(item: rspotify_model::PlayableItem) -> Option<Self> {
        match item {
            rspotify_model::PlayableItem::Track(track) => Self::try_from_full_track(track),
            _ => None,
        }
    }

    pub fn first_artist(&self) -> &str {
        self.artists.first().map(String::as_str).unwrap_or_default()
    }

    pub fn artists_joined(&self) -> String {
        self.artists.join(", ")
    }
}

fn owner_name(owner: rspotify_model::PublicUser) -> String {
    owner
        .display_name
        .unwrap_or_else(|| owner.id.id().to_string())
}

impl From<rspotify_model::SimplifiedPlaylist> for Playlist {
    fn from(playlist: rspotify_model::SimplifiedPlaylist) -> Self {
        Self {
            id: playlist.id.id().to_string(),
            name: playlist.name,
            owner: owner_name(playlist.owner),
            public: playlist.public.unwrap_or_default(),
            collaborative: playlist.collaborative,
            total_tracks: playlist.tracks.total,
        }
    }
}

impl From<rspotify_model::FullPlaylist> for Playlist {
    fn from(playlist: rspotify_model::FullPlaylist) -> Self {
        Self {
            id: playlist.id.id().to_string(),
            name: playlist.name,
            owner: owner_name(playlist.owner),
            public: playlist.public.unwrap_or_default(),
            collaborative: playlist.collaborative,
            total_tracks: playlist.tracks.total,
        }
    }
}

impl From<rspotify_model::PrivateUser> for User {
    fn from(user: rspotify_model::PrivateUser) -> Self {
        Self {
            id: user.id.id().to_string(),
            display_name: user.display_name,
        }
    }
}
