use anyhow::{anyhow, Result};
use rspotify::{prelude::*, AuthCodeSpotify, Credentials, OAuth};

use crate::config::Configs;
use crate::constant::SCOPES;

#[derive(Clone)]
pub struct AuthConfig {
    pub creds: Credentials,
    pub oauth: OAuth,
    pub client_config: rspotify::Config,
}

impl AuthConfig {
    pub fn new(configs: &Configs) -> Result<AuthConfig> {
        let app_config = &configs.app_config;
        app_config.validate()?;

        let creds = Credentials::new(&app_config.client_id, &app_config.client_secret);
        let oauth = OAuth {
            redirect_uri: app_config.redirect_uri.to_owned(),
            scopes: SCOPES.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let client_config = rspotify::Config {
            token_cached: true,
            token_refreshing: true,
            cache_path: configs.token_cache_path(),
            ..Default::default()
        };

        Ok(AuthConfig {
            creds,
            oauth,
            client_config,
        })
    }
}

async fn new_session_with_new_creds(spotify: AuthCodeSpotify) -> Result<AuthCodeSpotify> {
    tracing::info!("Creating a new session with new authentication credentials");

    if let Some(parent) = spotify.get_config().cache_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let url = spotify.get_authorize_url(false)?;
    match spotify.prompt_for_token(&url).await {
        Ok(()) => {
            eprintln!("Successfully authenticated.");
            Ok(spotify)
        }
        Err(err) => {
            eprintln!("Failed to authenticate.");
            anyhow::bail!("Failed to authenticate: {err:#}")
        }
    }
}

/// Create an authenticated API client, reusing the cached token when there is one.
///
/// Without a cached token the interactive authorization flow is started if `reauth`
/// is set, otherwise an error is returned.
pub async fn new_session(auth_config: &AuthConfig, reauth: bool) -> Result<AuthCodeSpotify> {
    let spotify = AuthCodeSpotify::with_config(
        auth_config.creds.clone(),
        auth_config.oauth.clone(),
        auth_config.client_config.clone(),
    );

    let cached = match spotify.read_token_cache(true).await {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!("failed to read the token cache: {err:#}");
            None
        }
    };

    match cached {
        None => {
            let msg = "No cached credentials found, please authenticate the application first.";
            if reauth {
                eprintln!("{msg}");
                new_session_with_new_creds(spotify).await
            } else {
                anyhow::bail!(msg);
            }
        }
        Some(token) => {
            let expired = token.is_expired();
            *spotify
                .token
                .lock()
                .await
                .map_err(|_| anyhow!("failed to lock the client token"))? = Some(token);

            if expired {
                tracing::info!("Cached token has expired, refreshing it...");
                if let Err(err) = spotify.refresh_token().await {
                    tracing::warn!("failed to refresh the cached token: {err:#}");
                    if !reauth {
                        anyhow::bail!("Failed to authenticate using cached credentials: {err:#}");
                    }
                    return new_session_with_new_creds(spotify).await;
                }
                spotify.write_token_cache().await?;
            }

            tracing::info!("Successfully used the cached credentials to create a new session!");
            Ok(spotify)
        }
    }
}
