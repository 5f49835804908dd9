use anyhow::Result;
use clap::Parser;
use spotifycli::require::*;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "spotifycli=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    set_config(Configs::from_env(cli.config_dir)?);
    let configs = get_config();
    tracing::debug!("using config folder {}", configs.config_folder.display());

    let client = ClientHandler::new(configs)?.client_new(true).await?;

    let stdout = std::io::stdout();
    execute(&client, cli.command, &mut stdout.lock()).await
}
