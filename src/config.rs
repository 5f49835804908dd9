use crate::constant::*;

use anyhow::{anyhow, Context as _, Result};
use config_parser2::*;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

static CONFIGS: OnceLock<Configs> = OnceLock::new();

#[derive(Debug)]
pub struct Configs {
    pub app_config: AppConfig,
    pub config_folder: PathBuf,
    pub cache_folder: PathBuf,
}

impl Configs {
    pub fn new<P, Q>(config_folder: P, cache_folder: Q) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let mut app_config = AppConfig::new(config_folder.as_ref())?;
        app_config.apply_overrides(|key| std::env::var(key).ok());

        Ok(Self {
            app_config,
            config_folder: config_folder.as_ref().to_path_buf(),
            cache_folder: cache_folder.as_ref().to_path_buf(),
        })
    }

    /// Build the configurations from the environment (and a `.env` file, if any).
    ///
    /// `config_folder` takes precedence over `SPOTIFYCLI_CONFIG_DIR`, which takes
    /// precedence over the default folder in the user's home.
    pub fn from_env(config_folder: Option<PathBuf>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_folder = match config_folder {
            Some(folder) => folder,
            None => match std::env::var_os("SPOTIFYCLI_CONFIG_DIR") {
                Some(folder) => PathBuf::from(folder),
                None => get_config_folder_path()?,
            },
        };
        let cache_folder = get_cache_folder_path()?;

        Self::new(config_folder, cache_folder)
    }

    pub fn token_cache_path(&self) -> PathBuf {
        self.cache_folder.join(TOKEN_CACHE_FILE)
    }
}

#[derive(Debug, Deserialize, Serialize, ConfigParse)]
/// Application configurations
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::default();
        if !config.parse_config_file(path.as_ref())? {
            config.write_config_file(path.as_ref())?
        }

        Ok(config)
    }

    // parses configurations from an application config file in `path` folder,
    // then updates the current configurations accordingly.
    // returns false if no config file found and true otherwise
    fn parse_config_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let file_path = path.as_ref().join(APP_CONFIG_FILE);
        match std::fs::read_to_string(&file_path) {
            Ok(content) => self
                .parse(toml::from_str::<toml::Value>(&content)?)
                .with_context(|| format!("parse {}", file_path.display()))
                .map(|_| true),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error.into()),
        }
    }

    fn write_config_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        if let Err(err) = std::fs::create_dir_all(path.as_ref()) {
            // a read-only home should not prevent using the defaults
            tracing::warn!("failed to create config folder {}: {err:#}", path.as_ref().display());
            return Ok(());
        }
        toml::to_string_pretty(&self)
            .map_err(From::from)
            .and_then(|content| {
                std::fs::write(path.as_ref().join(APP_CONFIG_FILE), content)
                    .map_err(From::from)
            })
    }

    /// Override file values with the ones found by `lookup`
    /// (`SPOTIFY_ID`, `SPOTIFY_SECRET`, `SPOTIFY_REDIRECT_URI`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(id) = non_empty("SPOTIFY_ID") {
            self.client_id = id;
        }
        if let Some(secret) = non_empty("SPOTIFY_SECRET") {
            self.client_secret = secret;
        }
        if let Some(uri) = non_empty("SPOTIFY_REDIRECT_URI") {
            self.redirect_uri = uri;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            anyhow::bail!(
                "missing Spotify application credentials: set `client_id` and `client_secret` \
                 in {APP_CONFIG_FILE} or the SPOTIFY_ID and SPOTIFY_SECRET environment variables"
            );
        }
        Ok(())
    }
}

/// gets the application's configuration folder path
pub fn get_config_folder_path() -> Result<PathBuf> {
    match dirs_next::home_dir() {
        Some(home) => Ok(home.join(DEFAULT_CONFIG_FOLDER)),
        None => Err(anyhow!("cannot find the folder")),
    }
}

/// gets the application's cache folder path
pub fn get_cache_folder_path() -> Result<PathBuf> {
    match dirs_next::home_dir() {
        Some(home) => Ok(home.join(DEFAULT_CACHE_FOLDER)),
        None => Err(anyhow!("cannot find the folder")),
    }
}

#[inline(always)]
pub fn get_config() -> &'static Configs {
    CONFIGS.get().expect("configs is already initialized")
}

pub fn set_config(configs: Configs) {
    CONFIGS
        .set(configs)
        .expect("configs should be initialized only once")
}
