//! NBA lookup against stats.nba.com.
//!
//! The player is matched against the in-memory roster, then one career
//! statistics call provides the season rows the stat block is built from.

pub mod compute;
pub mod http;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::{cli::types::NbaPlayerId, models::PlayerSummary, Result};

use types::{RosterIndex, SeasonRow};

pub use http::NbaClient;


/// Capabilities the NBA lookup and cache export need from their upstream.
#[async_trait]
pub trait NbaApi: Send + Sync {
    /// Every known player, active or not.
    async fn roster(&self) -> Result<Arc<RosterIndex>>;

    /// Regular-season rows for one player (may include a "Career" row).
    async fn career_rows(&self, player_id: NbaPlayerId) -> Result<Vec<SeasonRow>>;
}

/// Resolve `name` to an NBA player summary.
///
/// `Ok(None)` when no roster name matches or the player has no stat rows.
pub async fn lookup_nba_player(api: &dyn NbaApi, name: &str) -> Result<Option<PlayerSummary>> {
    let roster = api.roster().await?;
    let Some(player) = roster.find_by_full_name(name) else {
        debug!(%name, "no NBA roster match");
        return Ok(None);
    };

    let rows = api.career_rows(player.id).await?;
    let Some(stats) = compute::career_stat_block(&rows) else {
        debug!(%name, player_id = %player.id, "NBA player has no stat rows");
        return Ok(None);
    };

    Ok(Some(compute::summarize(&player.full_name, stats)))
}
