//! MLB Stats API response shapes.
//!
//! Only the fields the lookup reads are modelled; everything else in the
//! payload is ignored.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cli::types::MlbPersonId;

/// Raw stat object of a split: provider key (`avg`, `homeRuns`, ...) to value.
pub type StatLine = BTreeMap<String, Value>;

/// `/api/v1/people/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeopleSearchResponse {
    #[serde(default)]
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: MlbPersonId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<PrimaryPosition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimaryPosition {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// `/api/v1/people/{id}/stats`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub stats: Vec<StatGroupEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatGroupEntry {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatSplit {
    #[serde(default)]
    pub stat: StatLine,
}

impl StatsResponse {
    /// Stat object of the first split of the first stats entry, if any.
    pub fn first_stat_line(&self) -> Option<&StatLine> {
        self.stats
            .first()
            .and_then(|entry| entry.splits.first())
            .map(|split| &split.stat)
    }
}

impl Person {
    pub fn position_abbreviation(&self) -> Option<String> {
        self.primary_position
            .as_ref()
            .and_then(|p| p.abbreviation.clone())
    }
}

/// Career stat groups requested per person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatGroup {
    Hitting,
    Pitching,
}

impl StatGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "hitting",
            StatGroup::Pitching => "pitching",
        }
    }
}
