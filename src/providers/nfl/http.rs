use async_trait::async_trait;
use reqwest::Client;

use crate::{cli::types::NflAthleteId, core::get_json, Result};

use super::{
    types::{AthleteDetail, AthleteStatistics, SearchResponse},
    NflApi,
};


/// Results requested from the ESPN search endpoint.
pub const SEARCH_LIMIT: u32 = 5;

const ATHLETES_PATH: &str = "v2/sports/football/leagues/nfl/athletes";

/// ESPN client for NFL athletes (search plus core API).
#[derive(Debug, Clone)]
pub struct NflClient {
    client: Client,
    search_base_url: String,
    core_base_url: String,
}

impl NflClient {
    pub fn new(
        client: Client,
        search_base_url: impl Into<String>,
        core_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            search_base_url: search_base_url.into().trim_end_matches('/').to_string(),
            core_base_url: core_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NflApi for NflClient {
    async fn search_athletes(&self, query: &str) -> Result<SearchResponse> {
        let url = format!("{}/apis/search/v2", self.search_base_url);
        let params = [
            ("query", query.to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
            ("type", "player".to_string()),
        ];

        get_json(&self.client, &url, &params, None).await
    }

    async fn athlete(&self, id: &NflAthleteId) -> Result<AthleteDetail> {
        let url = format!("{}/{}/{}", self.core_base_url, ATHLETES_PATH, id);
        get_json(&self.client, &url, &[], None).await
    }

    async fn athlete_statistics(&self, id: &NflAthleteId) -> Result<AthleteStatistics> {
        let url = format!("{}/{}/{}/statistics", self.core_base_url, ATHLETES_PATH, id);
        get_json(&self.client, &url, &[], None).await
    }
}
