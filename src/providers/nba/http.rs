use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

use crate::{
    cli::types::NbaPlayerId,
    core::{get_json, nba_stats_headers},
    error::SportsError,
    Result,
};

use super::{
    types::{ResultSetResponse, RosterEntry, RosterIndex, SeasonRow},
    NbaApi,
};

#[cfg(test)]
mod tests;

/// League id for the NBA on stats.nba.com.
pub const NBA_LEAGUE_ID: &str = "00";

/// stats.nba.com client.
///
/// The roster is fetched once, on first use, and reused for the life of the
/// client.
#[derive(Debug)]
pub struct NbaClient {
    client: Client,
    base_url: String,
    season: String,
    roster: OnceCell<Arc<RosterIndex>>,
}

impl NbaClient {
    pub fn new(client: Client, base_url: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            season: season.into(),
            roster: OnceCell::new(),
        }
    }

    async fn fetch_roster(&self) -> Result<Arc<RosterIndex>> {
        let url = format!("{}/stats/commonallplayers", self.base_url);
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("Season", self.season.clone()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];

        let response: ResultSetResponse =
            get_json(&self.client, &url, &params, Some(nba_stats_headers())).await?;
        let set = response
            .first_set()
            .ok_or_else(|| SportsError::malformed("nba", "commonallplayers without resultSets"))?;

        let index = RosterIndex::new(RosterEntry::from_result_set(set)?);
        info!(players = index.len(), "loaded NBA roster");

        Ok(Arc::new(index))
    }
}

#[async_trait]
impl NbaApi for NbaClient {
    async fn roster(&self) -> Result<Arc<RosterIndex>> {
        self.roster
            .get_or_try_init(|| self.fetch_roster())
            .await
            .map(Arc::clone)
    }

    async fn career_rows(&self, player_id: NbaPlayerId) -> Result<Vec<SeasonRow>> {
        let url = format!("{}/stats/playercareerstats", self.base_url);
        let params = [
            ("PlayerID", player_id.to_string()),
            ("PerMode", "Totals".to_string()),
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
        ];

        let response: ResultSetResponse =
            get_json(&self.client, &url, &params, Some(nba_stats_headers())).await?;

        match response.first_set() {
            Some(set) => SeasonRow::from_result_set(set),
            None => Ok(Vec::new()),
        }
    }
}
