//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use rosetta_sports::{
    cli::{Commands, Rosetta},
    commands::{
        build_nba_cache::{handle_build_nba_cache, BuildCacheParams},
        serve::handle_serve,
    },
    core::{build_client, ServiceConfig, UpstreamConfig},
    logging::init_logging,
    providers::NbaClient,
    Result,
};
use std::time::Duration;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let app = Rosetta::parse();

    match app.command {
        Commands::Serve { bind, upstream } => {
            let mut config = ServiceConfig::from_env()?;
            if let Some(bind) = bind {
                config.bind = bind.parse()?;
            }
            upstream.apply(&mut config.upstream);

            handle_serve(config).await?;
        }

        Commands::BuildNbaCache {
            output,
            delay_ms,
            upstream,
        } => {
            let mut config = UpstreamConfig::from_env()?;
            upstream.apply(&mut config);

            let client = build_client(config.timeout)?;
            let nba = NbaClient::new(client, config.nba_base_url, config.nba_season);
            handle_build_nba_cache(
                &nba,
                &BuildCacheParams {
                    output,
                    delay: Duration::from_millis(delay_ms),
                },
            )
            .await?;
        }
    }

    Ok(())
}
