use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constant::SEARCH_LIMIT;

/// spotifycli - manage your Spotify playlists from the terminal
#[derive(Debug, Parser)]
#[command(name = "spotifycli")]
#[command(about = "List, search and edit Spotify playlists from the command line")]
#[command(version)]
#[command(after_help = r#"CONFIGURATION:
    Credentials of a Spotify application are read from app.toml in the
    config folder (default: ~/.config/spotifycli) or from the SPOTIFY_ID
    and SPOTIFY_SECRET environment variables. The first run opens the
    authorization page and caches the token in ~/.cache/spotifycli.

EXAMPLES:
    spotifycli playlists
    spotifycli list --p "Road Trip"
    spotifycli add --t "Harder Better Faster Stronger" --p "Road Trip"
    spotifycli aid --tid spotify:track:6D6Pybzey0shI8U9ttRAPx --p "Road Trip"
    spotifycli rm --t "One More Time" --p "Road Trip"
"#)]
pub struct Cli {
    /// Folder holding app.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log API calls to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Displays the currently playing track
    Now,

    /// Display information about a track by ID
    Show {
        /// Id, URI or link of the track to display
        #[arg(long = "tid", value_name = "TRACK_ID")]
        track_id: String,
    },

    /// Add currently playing track to playlist
    Ato {
        /// Playlist to add the current track to
        #[arg(long = "p", value_name = "PLAYLIST_NAME")]
        playlist: String,
    },

    /// Add track by ID to playlist
    Aid {
        /// Id, URI or link of the track to add
        #[arg(long = "tid", value_name = "TRACK_ID")]
        track_id: String,

        /// Name of playlist to add track to
        #[arg(long = "p", value_name = "PLAYLIST_NAME")]
        playlist: String,
    },

    /// Add track by name to playlist
    Add {
        /// Name of track to add to playlist
        #[arg(long = "t", value_name = "TRACK_NAME")]
        track: String,

        /// Name of playlist to add track to
        #[arg(long = "p", value_name = "PLAYLIST_NAME")]
        playlist: String,
    },

    /// Remove track from playlist
    Rm {
        /// Name of track to remove
        #[arg(long = "t", value_name = "TRACK_NAME")]
        track: String,

        /// Name of playlist to remove track from
        #[arg(long = "p", value_name = "PLAYLIST_NAME")]
        playlist: String,
    },

    /// Show all playlists
    Playlists,

    /// Create new playlist
    New {
        /// Name of new playlist
        #[arg(long = "p", value_name = "PLAYLIST_NAME")]
        playlist: String,

        /// Create the playlist as private
        #[arg(long)]
        private: bool,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a playlist
    Del {
        /// Name of playlist to delete
        #[arg(long = "p", value_name = "PLAYLIST_NAME")]
        playlist: String,
    },

    /// List tracks in playlist
    List {
        /// Name of playlist to list tracks from
        #[arg(long = "p", value_name = "PLAYLIST_NAME")]
        playlist: String,
    },

    /// Search tracks by name
    Search {
        /// Track name to search for
        #[arg(long = "t", value_name = "TRACK_NAME")]
        track: String,

        /// Maximum number of results
        #[arg(long, default_value_t = SEARCH_LIMIT, value_parser = clap::value_parser!(u32).range(1..=50))]
        limit: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_the_short_flag_names() {
        let cli = Cli::try_parse_from([
            "spotifycli",
            "aid",
            "--tid",
            "6D6Pybzey0shI8U9ttRAPx",
            "--p",
            "Road Trip",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Aid {
                track_id: "6D6Pybzey0shI8U9ttRAPx".to_string(),
                playlist: "Road Trip".to_string(),
            }
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["spotifycli", "playlists", "-v", "--config-dir", "/tmp/x"])
            .unwrap();
        assert_eq!(cli.command, Command::Playlists);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn playlist_name_is_required() {
        assert!(Cli::try_parse_from(["spotifycli", "list"]).is_err());
        assert!(Cli::try_parse_from(["spotifycli", "rm", "--t", "x"]).is_err());
    }

    #[test]
    fn search_limit_defaults_and_is_bounded() {
        let cli = Cli::try_parse_from(["spotifycli", "search", "--t", "daft"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Search {
                track: "daft".to_string(),
                limit: SEARCH_LIMIT,
            }
        );
        assert!(Cli::try_parse_from(["spotifycli", "search", "--t", "x", "--limit", "0"]).is_err());
    }
}
