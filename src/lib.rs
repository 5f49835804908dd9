mod utils;
mod constant;
mod config;
mod auth;
mod model;
mod paging;
mod table;
mod client;
mod commands;
mod cli;

pub mod require {
    pub use crate::config::{Configs, get_config, set_config};
    pub use crate::client::{Client, SpotifyApi};
    pub use crate::cli::{Cli, Command};
    pub use crate::commands::execute;
    pub use crate::ClientHandler;
}

pub struct ClientHandler {
    auth_config: auth::AuthConfig,
}

impl ClientHandler {
    pub fn new(configs: &config::Configs) -> anyhow::Result<Self> {
        Ok(Self {
            auth_config: auth::AuthConfig::new(configs)?,
        })
    }

    /// Authenticate against the Web API and build a client.
    ///
    /// The interactive authorization is only started when `reauth` is set and no
    /// usable token is cached.
    pub async fn client_new(&self, reauth: bool) -> anyhow::Result<client::Client> {
        let session = auth::new_session(&self.auth_config, reauth).await?;
        Ok(client::Client::new(session))
    }
}
