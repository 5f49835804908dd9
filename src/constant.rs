pub const DEFAULT_CONFIG_FOLDER: &str = ".config/spotifycli";
pub const DEFAULT_CACHE_FOLDER: &str = ".cache/spotifycli";
pub const APP_CONFIG_FILE: &str = "app.toml";
pub const TOKEN_CACHE_FILE: &str = ".spotify_token_cache.json";

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback";

/// Page size used when walking the items of a playlist
pub const SPOTIFY_MAX_LIMIT: u32 = 100;

/// Largest page the service hands out for the user's playlists
pub const PLAYLISTS_PAGE_LIMIT: u32 = 50;

pub const SEARCH_LIMIT: u32 = 20;

pub const SCOPES: &[&str] = &[
    "playlist-read-private",
    "playlist-read-collaborative",
    "playlist-modify-public",
    "playlist-modify-private",
    "user-read-currently-playing",
    "user-read-playback-state",
    "user-read-private",
];
