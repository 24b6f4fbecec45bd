//! Offline export of career averages for every active NBA player.
//!
//! Walks the active roster one player at a time, pausing between players so
//! the stats provider isn't hammered, and writes the whole table to a single
//! JSON file keyed by lower-cased full name. A failure for one player is
//! logged and skipped; only a roster failure aborts the run.

use std::{collections::BTreeMap, path::PathBuf, time::Duration};
use tracing::{info, warn};

use crate::{
    core::write_json,
    models::PlayerSummary,
    providers::nba::{compute, NbaApi},
    Result,
};

/// Parameters for the build-nba-cache command
#[derive(Debug, Clone)]
pub struct BuildCacheParams {
    pub output: PathBuf,
    /// Pause after each player.
    pub delay: Duration,
}

/// Build the name -> summary table for every active player.
///
/// Only season rows are aggregated; a provider "Career" row is ignored.
/// Players without season rows are left out.
pub async fn build_nba_cache(
    api: &dyn NbaApi,
    delay: Duration,
) -> Result<BTreeMap<String, PlayerSummary>> {
    let roster = api.roster().await?;
    let mut table = BTreeMap::new();

    for player in roster.active() {
        match api.career_rows(player.id).await {
            Ok(rows) => match compute::aggregate_season_rows(&rows) {
                Some(stats) => {
                    info!("✓ {}", player.full_name);
                    table.insert(
                        player.full_name.to_lowercase(),
                        compute::summarize(&player.full_name, stats),
                    );
                }
                None => info!("- {} (no season rows)", player.full_name),
            },
            Err(e) => warn!("✗ {}: {}", player.full_name, e),
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(table)
}

/// Handle the build-nba-cache command; returns the number of players written.
pub async fn handle_build_nba_cache(api: &dyn NbaApi, params: &BuildCacheParams) -> Result<usize> {
    println!("Building NBA players...");

    let table = build_nba_cache(api, params.delay).await?;
    write_json(&params.output, &table)?;

    println!(
        "\nDone! {} players saved to {}",
        table.len(),
        params.output.display()
    );

    Ok(table.len())
}
