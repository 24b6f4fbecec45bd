//! MLB lookup against the MLB Stats API.
//!
//! Three sequential calls: people search, career hitting, career pitching.
//! The stat calls are always both made, even when hitting data exists.

pub mod compute;
pub mod http;
pub mod types;

use async_trait::async_trait;
use tracing::debug;

use crate::{cli::types::MlbPersonId, models::PlayerSummary, Result};

use types::{PeopleSearchResponse, StatGroup, StatsResponse};

pub use http::MlbClient;


/// Capabilities the MLB lookup needs from its upstream.
#[async_trait]
pub trait MlbApi: Send + Sync {
    async fn search_people(&self, name: &str) -> Result<PeopleSearchResponse>;

    async fn career_stats(&self, person_id: MlbPersonId, group: StatGroup)
        -> Result<StatsResponse>;
}

/// Resolve `name` to an MLB player summary.
///
/// `Ok(None)` when the search returns nobody.
pub async fn lookup_mlb_player(api: &dyn MlbApi, name: &str) -> Result<Option<PlayerSummary>> {
    let search = api.search_people(name).await?;
    let Some(person) = search.people.first() else {
        debug!(%name, "no MLB person matched");
        return Ok(None);
    };

    let hitting = api.career_stats(person.id, StatGroup::Hitting).await?;
    let pitching = api.career_stats(person.id, StatGroup::Pitching).await?;

    debug!(%name, person_id = %person.id, "resolved MLB person");

    Ok(Some(compute::summarize(
        person,
        name,
        hitting.first_stat_line(),
        pitching.first_stat_line(),
    )))
}
