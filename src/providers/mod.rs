//! Upstream statistics providers, one module per sport.
//!
//! Each sport exposes an async capability trait (`MlbApi`, `NbaApi`,
//! `NflApi`), a reqwest-backed client implementing it, and a lookup
//! function returning `Ok(Some(summary))`, `Ok(None)` for "no such player",
//! or `Err` for any upstream failure.

pub mod mlb;
pub mod nba;
pub mod nfl;

use std::sync::Arc;

use crate::{
    cli::types::Sport,
    core::{build_client, UpstreamConfig},
    models::PlayerSummary,
    Result,
};

pub use mlb::{lookup_mlb_player, MlbApi, MlbClient};
pub use nba::{lookup_nba_player, NbaApi, NbaClient};
pub use nfl::{lookup_nfl_player, NflApi, NflClient};

/// The upstream clients the API dispatches to.
#[derive(Clone)]
pub struct Providers {
    pub mlb: Arc<dyn MlbApi>,
    pub nba: Arc<dyn NbaApi>,
    pub nfl: Arc<dyn NflApi>,
}

impl Providers {
    pub fn new(mlb: Arc<dyn MlbApi>, nba: Arc<dyn NbaApi>, nfl: Arc<dyn NflApi>) -> Self {
        Self { mlb, nba, nfl }
    }

    /// Real clients sharing one HTTP client configured from `config`.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let client = build_client(config.timeout)?;

        Ok(Self::new(
            Arc::new(MlbClient::new(client.clone(), config.mlb_base_url.as_str())),
            Arc::new(NbaClient::new(
                client.clone(),
                config.nba_base_url.as_str(),
                config.nba_season.as_str(),
            )),
            Arc::new(NflClient::new(
                client,
                config.espn_search_base_url.as_str(),
                config.espn_core_base_url.as_str(),
            )),
        ))
    }

    /// Run the lookup for `sport`.
    pub async fn lookup(&self, sport: Sport, name: &str) -> Result<Option<PlayerSummary>> {
        match sport {
            Sport::Mlb => lookup_mlb_player(self.mlb.as_ref(), name).await,
            Sport::Nba => lookup_nba_player(self.nba.as_ref(), name).await,
            Sport::Nfl => lookup_nfl_player(self.nfl.as_ref(), name).await,
        }
    }
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers").finish_non_exhaustive()
    }
}
