//! The subcommands: a few API calls each, followed by printing the result
use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::Command;
use crate::client::{all_playlist_tracks, all_playlists, playlist_by_name, SpotifyApi};
use crate::model::{Playlist, Track};
use crate::table::{duration_string, minutes_seconds, print_simple};
use crate::utils::normalize_track_id;

const TRACK_HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Album",
    "Artist",
    "Duration",
    "Popularity",
    "Explicit",
    "Preview",
];

/// Run a parsed subcommand against `api`, writing its output to `out`
pub async fn execute<W: Write>(api: &dyn SpotifyApi, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Now => display_current_track(api, out).await,
        Command::Show { track_id } => display_track_by_id(api, &track_id, out).await,
        Command::Ato { playlist } => add_current_track_to_playlist(api, &playlist, out).await,
        Command::Aid { track_id, playlist } => {
            add_track_by_id_to_playlist(api, &track_id, &playlist, out).await
        }
        Command::Add { track, playlist } => {
            add_track_by_name_to_playlist(api, &track, &playlist, out).await
        }
        Command::Rm { track, playlist } => {
            remove_track_by_name_from_playlist(api, &track, &playlist, out).await
        }
        Command::Playlists => list_playlists(api, out).await,
        Command::New {
            playlist,
            private,
            description,
        } => new_playlist(api, &playlist, !private, description.as_deref(), out).await,
        Command::Del { playlist } => delete_playlist(api, &playlist, out).await,
        Command::List { playlist } => list_playlist_tracks(api, &playlist, out).await,
        Command::Search { track, limit } => search_tracks(api, &track, limit, out).await,
    }
}

fn track_row(track: &Track) -> Vec<String> {
    vec![
        track.id.clone(),
        track.name.clone(),
        track.album.clone(),
        track.first_artist().to_string(),
        duration_string(track.duration),
        track.popularity.to_string(),
        track.explicit.to_string(),
        track.preview_url.clone().unwrap_or_default(),
    ]
}

fn display_track<W: Write>(track: &Track, out: &mut W) -> Result<()> {
    print_simple(out, &TRACK_HEADERS, &[track_row(track)])?;
    Ok(())
}

pub async fn display_track_by_id<W: Write>(
    api: &dyn SpotifyApi,
    track_id: &str,
    out: &mut W,
) -> Result<()> {
    let track = api.track(&normalize_track_id(track_id)).await?;
    display_track(&track, out)
}

pub async fn display_current_track<W: Write>(api: &dyn SpotifyApi, out: &mut W) -> Result<()> {
    let track = api
        .currently_playing()
        .await?
        .ok_or_else(|| anyhow!("no track is currently playing"))?;
    display_track(&track, out)
}

async fn add_to_playlist<W: Write>(
    api: &dyn SpotifyApi,
    playlist: &Playlist,
    track: &Track,
    out: &mut W,
) -> Result<()> {
    api.add_tracks_to_playlist(&playlist.id, &[track.id.clone()])
        .await?;
    writeln!(
        out,
        "Added track \"{}\" to playlist \"{}\".",
        track.name, playlist.name
    )?;
    Ok(())
}

pub async fn add_current_track_to_playlist<W: Write>(
    api: &dyn SpotifyApi,
    playlist_name: &str,
    out: &mut W,
) -> Result<()> {
    let playlist = playlist_by_name(api, playlist_name).await?;
    writeln!(out, "Playlist: {}", playlist.name)?;

    let track = api
        .currently_playing()
        .await?
        .ok_or_else(|| anyhow!("no track is currently playing"))?;
    writeln!(out, "Track: {}", track.name)?;

    add_to_playlist(api, &playlist, &track, out).await
}

pub async fn add_track_by_id_to_playlist<W: Write>(
    api: &dyn SpotifyApi,
    track_id: &str,
    playlist_name: &str,
    out: &mut W,
) -> Result<()> {
    let playlist = playlist_by_name(api, playlist_name).await?;
    writeln!(out, "Playlist: {}", playlist.name)?;

    // fetching the track first checks that it exists
    let track = api.track(&normalize_track_id(track_id)).await?;
    writeln!(out, "Track: {}", track.name)?;

    add_to_playlist(api, &playlist, &track, out).await
}

/// Pick the most popular track, the first one among equally popular tracks
fn most_popular(tracks: Vec<Track>) -> Option<Track> {
    tracks
        .into_iter()
        .reduce(|best, t| if t.popularity > best.popularity { t } else { best })
}

pub async fn add_track_by_name_to_playlist<W: Write>(
    api: &dyn SpotifyApi,
    track_name: &str,
    playlist_name: &str,
    out: &mut W,
) -> Result<()> {
    let playlist = playlist_by_name(api, playlist_name).await?;
    writeln!(out, "Playlist: {}", playlist.name)?;

    let results = api
        .search_tracks(track_name, crate::constant::SEARCH_LIMIT)
        .await?;
    match most_popular(results) {
        Some(track) => {
            writeln!(out, "Track: {}", track.name)?;
            add_to_playlist(api, &playlist, &track, out).await
        }
        None => {
            writeln!(out, "Track {track_name} not found.")?;
            Ok(())
        }
    }
}

pub async fn remove_track_by_name_from_playlist<W: Write>(
    api: &dyn SpotifyApi,
    track_name: &str,
    playlist_name: &str,
    out: &mut W,
) -> Result<()> {
    let playlist = playlist_by_name(api, playlist_name).await?;

    let track = all_playlist_tracks(api, &playlist.id)
        .await?
        .into_iter()
        .find(|t| t.name == track_name)
        .ok_or_else(|| anyhow!("track {track_name} not found in playlist {playlist_name}"))?;
    writeln!(out, "Track: {}", track.name)?;

    api.remove_tracks_from_playlist(&playlist.id, &[track.id.clone()])
        .await?;
    writeln!(
        out,
        "Removed track \"{}\" from playlist \"{}\".",
        track.name, playlist.name
    )?;
    Ok(())
}

pub async fn list_playlists<W: Write>(api: &dyn SpotifyApi, out: &mut W) -> Result<()> {
    let rows: Vec<Vec<String>> = all_playlists(api)
        .await?
        .into_iter()
        .map(|p| {
            vec![
                p.id,
                p.name,
                p.owner,
                p.public.to_string(),
                p.collaborative.to_string(),
                p.total_tracks.to_string(),
            ]
        })
        .collect();

    print_simple(
        out,
        &["ID", "Name", "Owner", "Public", "Collaborative", "Tracks"],
        &rows,
    )?;
    Ok(())
}

pub async fn new_playlist<W: Write>(
    api: &dyn SpotifyApi,
    playlist_name: &str,
    public: bool,
    description: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let user = api.current_user().await?;
    let playlist = api
        .create_playlist(&user.id, playlist_name, public, description)
        .await?;

    let visibility = if public { "public" } else { "private" };
    writeln!(out, "Created {visibility} playlist: {}", playlist.name)?;
    Ok(())
}

pub async fn delete_playlist<W: Write>(
    api: &dyn SpotifyApi,
    playlist_name: &str,
    out: &mut W,
) -> Result<()> {
    let playlist = playlist_by_name(api, playlist_name).await?;

    // deleting a playlist is unfollowing it
    api.unfollow_playlist(&playlist.id).await?;
    writeln!(out, "Deleted playlist: {}", playlist.name)?;
    Ok(())
}

pub async fn list_playlist_tracks<W: Write>(
    api: &dyn SpotifyApi,
    playlist_name: &str,
    out: &mut W,
) -> Result<()> {
    let playlist = playlist_by_name(api, playlist_name).await?;
    let tracks = all_playlist_tracks(api, &playlist.id).await?;
    if tracks.is_empty() {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = tracks
        .into_iter()
        .map(|t| {
            vec![
                t.artists_joined(),
                t.name.clone(),
                minutes_seconds(t.duration.num_seconds()),
                t.id,
            ]
        })
        .collect();

    print_simple(out, &["Artist", "Name", "Duration", "ID"], &rows)?;
    Ok(())
}

pub async fn search_tracks<W: Write>(
    api: &dyn SpotifyApi,
    query: &str,
    limit: u32,
    out: &mut W,
) -> Result<()> {
    let rows: Vec<Vec<String>> = api
        .search_tracks(query, limit)
        .await?
        .into_iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.name.clone(),
                t.first_artist().to_string(),
                t.album.clone(),
                t.popularity.to_string(),
            ]
        })
        .collect();

    if rows.is_empty() {
        writeln!(out, "Track {query} not found.")?;
        return Ok(());
    }

    print_simple(out, &["ID", "Name", "Artist", "Album", "Popularity"], &rows)?;
    Ok(())
}
