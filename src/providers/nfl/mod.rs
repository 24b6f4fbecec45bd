//! NFL lookup against ESPN.
//!
//! A free-text search yields a composite uid; the athlete id inside it
//! drives two core API calls (detail for position, statistics for stats).

pub mod compute;
pub mod http;
pub mod types;

use async_trait::async_trait;
use tracing::debug;

use crate::{cli::types::NflAthleteId, models::PlayerSummary, Result};

use types::{AthleteDetail, AthleteStatistics, SearchResponse};

pub use http::NflClient;

#[cfg(test)]
mod tests;

/// Capabilities the NFL lookup needs from its upstream.
#[async_trait]
pub trait NflApi: Send + Sync {
    async fn search_athletes(&self, query: &str) -> Result<SearchResponse>;

    async fn athlete(&self, id: &NflAthleteId) -> Result<AthleteDetail>;

    async fn athlete_statistics(&self, id: &NflAthleteId) -> Result<AthleteStatistics>;
}

/// Resolve `name` to an NFL player summary.
///
/// `Ok(None)` when the search is empty or its first hit carries no athlete id.
pub async fn lookup_nfl_player(api: &dyn NflApi, name: &str) -> Result<Option<PlayerSummary>> {
    let search = api.search_athletes(name).await?;
    let Some(entry) = search.first_entry() else {
        debug!(%name, "no NFL search results");
        return Ok(None);
    };

    let Some(athlete_id) = entry.uid.as_deref().and_then(NflAthleteId::from_uid) else {
        debug!(%name, uid = ?entry.uid, "NFL search hit without athlete id");
        return Ok(None);
    };

    let detail = api.athlete(&athlete_id).await?;
    let statistics = api.athlete_statistics(&athlete_id).await?;

    debug!(%name, %athlete_id, "resolved NFL athlete");

    Ok(Some(compute::summarize(
        name,
        entry,
        &detail,
        statistics.categories(),
    )))
}
