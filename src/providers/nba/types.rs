//! stats.nba.com response shapes.
//!
//! Every stats.nba.com endpoint answers with `resultSets`, each a table of
//! `headers` plus a `rowSet` of positional rows. Rows are read by column
//! name so column reordering upstream doesn't matter.

use deunicode::deunicode;
use serde::Deserialize;
use serde_json::Value;

use crate::{cli::types::NbaPlayerId, error::SportsError, Result};

const PROVIDER: &str = "nba";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSetResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSetResponse {
    pub fn first_set(&self) -> Option<&ResultSet> {
        self.result_sets.first()
    }
}

impl ResultSet {
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    fn require_column(&self, header: &str) -> Result<usize> {
        self.column(header)
            .ok_or_else(|| SportsError::malformed(PROVIDER, format!("missing {} column", header)))
    }
}

fn cell(row: &[Value], idx: Option<usize>) -> Option<&Value> {
    idx.and_then(|i| row.get(i))
}

fn cell_f64(row: &[Value], idx: Option<usize>) -> Option<f64> {
    cell(row, idx).and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// One roster entry from `commonallplayers`.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: NbaPlayerId,
    pub full_name: String,
    pub is_active: bool,
}

impl RosterEntry {
    /// Read roster entries from a `commonallplayers` result set.
    ///
    /// Rows without a usable id or name are skipped.
    pub fn from_result_set(set: &ResultSet) -> Result<Vec<RosterEntry>> {
        let id_col = set.require_column("PERSON_ID")?;
        let name_col = set.require_column("DISPLAY_FIRST_LAST")?;
        let status_col = set.column("ROSTERSTATUS");

        let entries = set
            .row_set
            .iter()
            .filter_map(|row| {
                let id = row.get(id_col).and_then(Value::as_u64)?;
                let full_name = row.get(name_col).and_then(Value::as_str)?.trim();
                if full_name.is_empty() {
                    return None;
                }
                let is_active = match cell(row, status_col) {
                    Some(Value::Number(n)) => n.as_i64() == Some(1),
                    Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("active"),
                    Some(Value::Bool(b)) => *b,
                    _ => false,
                };
                Some(RosterEntry {
                    id: NbaPlayerId::new(id),
                    full_name: full_name.to_string(),
                    is_active,
                })
            })
            .collect();

        Ok(entries)
    }
}

/// `Nikola Jokić` and `nikola jokic` fold to the same key.
fn fold_name(name: &str) -> String {
    deunicode(name.trim()).to_lowercase()
}

/// In-memory player roster, searchable by name.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    entries: Vec<RosterEntry>,
}

impl RosterIndex {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First player whose full name matches `name`, ignoring case and accents.
    ///
    /// An exact full-name match wins over a partial one; otherwise the first
    /// roster entry containing `name` is returned.
    pub fn find_by_full_name(&self, name: &str) -> Option<&RosterEntry> {
        let needle = fold_name(name);
        if needle.is_empty() {
            return None;
        }

        let folded: Vec<String> = self.entries.iter().map(|e| fold_name(&e.full_name)).collect();

        folded
            .iter()
            .position(|n| *n == needle)
            .or_else(|| folded.iter().position(|n| n.contains(&needle)))
            .map(|i| &self.entries[i])
    }

    pub fn active(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter().filter(|e| e.is_active)
    }
}

/// One row of `playercareerstats` regular-season totals.
///
/// Numeric columns are `None` when the provider sent `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonRow {
    pub season_id: String,
    pub games_played: Option<f64>,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
}

impl SeasonRow {
    /// Read season rows from a `playercareerstats` result set.
    pub fn from_result_set(set: &ResultSet) -> Result<Vec<SeasonRow>> {
        let season_col = set.require_column("SEASON_ID")?;
        let gp = set.column("GP");
        let pts = set.column("PTS");
        let reb = set.column("REB");
        let ast = set.column("AST");
        let fg_pct = set.column("FG_PCT");
        let fg3_pct = set.column("FG3_PCT");

        set.row_set
            .iter()
            .map(|row| {
                let season_id = match row.get(season_col) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => {
                        return Err(SportsError::malformed(
                            PROVIDER,
                            "season row without SEASON_ID",
                        ))
                    }
                };
                Ok(SeasonRow {
                    season_id,
                    games_played: cell_f64(row, gp),
                    points: cell_f64(row, pts),
                    rebounds: cell_f64(row, reb),
                    assists: cell_f64(row, ast),
                    fg_pct: cell_f64(row, fg_pct),
                    fg3_pct: cell_f64(row, fg3_pct),
                })
            })
            .collect()
    }
}
