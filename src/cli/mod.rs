//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::{cache::DEFAULT_CACHE_FILE, config::UpstreamConfig};

/// Upstream overrides shared between commands.
///
/// Anything left unset keeps the value resolved from the environment.
#[derive(Debug, Default, Args)]
pub struct UpstreamArgs {
    /// Per-request upstream timeout in seconds (or set `ROSETTA_TIMEOUT_SECS`).
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// MLB Stats API base URL.
    #[clap(long)]
    pub mlb_base_url: Option<String>,

    /// NBA stats base URL.
    #[clap(long)]
    pub nba_base_url: Option<String>,

    /// NBA season used when loading the player roster (e.g. 2025-26).
    #[clap(long)]
    pub nba_season: Option<String>,

    /// ESPN search API base URL.
    #[clap(long)]
    pub espn_search_base_url: Option<String>,

    /// ESPN core API base URL.
    #[clap(long)]
    pub espn_core_base_url: Option<String>,
}

impl UpstreamArgs {
    /// Apply CLI overrides on top of an already resolved configuration.
    pub fn apply(self, config: &mut UpstreamConfig) {
        if let Some(secs) = self.timeout_secs {
            config.timeout = std::time::Duration::from_secs(secs);
        }
        if let Some(url) = self.mlb_base_url {
            config.mlb_base_url = url;
        }
        if let Some(url) = self.nba_base_url {
            config.nba_base_url = url;
        }
        if let Some(season) = self.nba_season {
            config.nba_season = season;
        }
        if let Some(url) = self.espn_search_base_url {
            config.espn_search_base_url = url;
        }
        if let Some(url) = self.espn_core_base_url {
            config.espn_core_base_url = url;
        }
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "rosetta-sports",
    about = "Unified MLB/NBA/NFL player statistics API"
)]
pub struct Rosetta {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    ///
    /// Serves `GET /player/{sport}/{name}` and `GET /health`.
    Serve {
        /// Address to listen on (or set `ROSETTA_BIND`), e.g. 127.0.0.1:5000.
        #[clap(long, short)]
        bind: Option<String>,

        #[clap(flatten)]
        upstream: UpstreamArgs,
    },

    /// Pre-fetch career averages for every active NBA player into a JSON file.
    BuildNbaCache {
        /// Output file; replaced on every run.
        #[clap(long, short, default_value = DEFAULT_CACHE_FILE)]
        output: PathBuf,

        /// Pause between players, in milliseconds.
        #[clap(long, default_value_t = 600)]
        delay_ms: u64,

        #[clap(flatten)]
        upstream: UpstreamArgs,
    },
}
