//! Career aggregation for NBA players.
//!
//! Shared by the live lookup and the offline cache export.

use crate::{
    cli::types::Sport,
    models::{PlayerSummary, StatBlock, StatValue},
};

use super::types::SeasonRow;

/// Season id the provider uses for a pre-summed career row.
pub const CAREER_SEASON_ID: &str = "Career";

/// Career totals a stat block is derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerTotals {
    pub games_played: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    /// Field-goal percentage as a fraction (0.0..=1.0).
    pub fg_pct: f64,
    /// Three-point percentage as a fraction (0.0..=1.0).
    pub fg3_pct: f64,
}

impl CareerTotals {
    fn from_row(row: &SeasonRow) -> Self {
        Self {
            games_played: row.games_played.unwrap_or(0.0),
            points: row.points.unwrap_or(0.0),
            rebounds: row.rebounds.unwrap_or(0.0),
            assists: row.assists.unwrap_or(0.0),
            fg_pct: row.fg_pct.unwrap_or(0.0),
            fg3_pct: row.fg3_pct.unwrap_or(0.0),
        }
    }
}

pub fn is_career_row(row: &SeasonRow) -> bool {
    row.season_id == CAREER_SEASON_ID
}

/// Round to one decimal place, halves to even.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Sum every non-career row.
///
/// Counting stats are summed; FG% and 3P% are the plain mean of the seasons
/// that report them (not weighted by attempts or games). `None` when there
/// are no season rows.
pub fn sum_season_rows(rows: &[SeasonRow]) -> Option<CareerTotals> {
    let seasons: Vec<&SeasonRow> = rows.iter().filter(|r| !is_career_row(r)).collect();
    if seasons.is_empty() {
        return None;
    }

    let total = |f: fn(&SeasonRow) -> Option<f64>| -> f64 {
        seasons.iter().filter_map(|r| f(r)).sum()
    };

    Some(CareerTotals {
        games_played: total(|r| r.games_played),
        points: total(|r| r.points),
        rebounds: total(|r| r.rebounds),
        assists: total(|r| r.assists),
        fg_pct: mean(seasons.iter().filter_map(|r| r.fg_pct)),
        fg3_pct: mean(seasons.iter().filter_map(|r| r.fg3_pct)),
    })
}

/// Totals from the provider's "Career" row, else summed season rows.
pub fn select_career_totals(rows: &[SeasonRow]) -> Option<CareerTotals> {
    match rows.iter().find(|r| is_career_row(r)) {
        Some(career) => Some(CareerTotals::from_row(career)),
        None => sum_season_rows(rows),
    }
}

/// Per-game averages and percentages for a set of career totals.
///
/// Games played is floored at 1, so a player with no recorded games still
/// gets finite averages and reports `GP: 1`.
pub fn stat_block(totals: &CareerTotals) -> StatBlock {
    let gp = totals.games_played.max(1.0);
    let pct = |fraction: f64| round1((fraction * 100.0).clamp(0.0, 100.0));

    let mut block = StatBlock::new();
    block.insert("PPG".to_string(), StatValue::Float(round1(totals.points / gp)));
    block.insert("RPG".to_string(), StatValue::Float(round1(totals.rebounds / gp)));
    block.insert("APG".to_string(), StatValue::Float(round1(totals.assists / gp)));
    block.insert("FG%".to_string(), StatValue::Float(pct(totals.fg_pct)));
    block.insert("3P%".to_string(), StatValue::Float(pct(totals.fg3_pct)));
    block.insert("GP".to_string(), StatValue::Int(gp as i64));
    block
}

/// Stat block from season rows only, ignoring any "Career" row.
///
/// This is what the cache export stores for every player.
pub fn aggregate_season_rows(rows: &[SeasonRow]) -> Option<StatBlock> {
    sum_season_rows(rows).map(|totals| stat_block(&totals))
}

/// Stat block the live lookup reports: the "Career" row when present,
/// otherwise the same aggregate the cache export uses.
pub fn career_stat_block(rows: &[SeasonRow]) -> Option<StatBlock> {
    select_career_totals(rows).map(|totals| stat_block(&totals))
}

/// NBA summaries never carry a position.
pub fn summarize(full_name: &str, stats: StatBlock) -> PlayerSummary {
    PlayerSummary::new(full_name, Sport::Nba, None, stats)
}
