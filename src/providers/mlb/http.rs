use async_trait::async_trait;
use reqwest::Client;

use crate::{cli::types::MlbPersonId, core::get_json, Result};

use super::{
    types::{PeopleSearchResponse, StatGroup, StatsResponse},
    MlbApi,
};


/// MLB `sportId` for the major leagues.
pub const MLB_SPORT_ID: &str = "1";

/// MLB Stats API client.
#[derive(Debug, Clone)]
pub struct MlbClient {
    client: Client,
    base_url: String,
}

impl MlbClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MlbApi for MlbClient {
    async fn search_people(&self, name: &str) -> Result<PeopleSearchResponse> {
        let url = format!("{}/api/v1/people/search", self.base_url);
        let params = [
            ("names", name.to_string()),
            ("sportId", MLB_SPORT_ID.to_string()),
        ];

        get_json(&self.client, &url, &params, None).await
    }

    async fn career_stats(
        &self,
        person_id: MlbPersonId,
        group: StatGroup,
    ) -> Result<StatsResponse> {
        let url = format!("{}/api/v1/people/{}/stats", self.base_url, person_id);
        let params = [
            ("stats", "career".to_string()),
            ("group", group.as_str().to_string()),
            ("sportId", MLB_SPORT_ID.to_string()),
        ];

        get_json(&self.client, &url, &params, None).await
    }
}
