//! ESPN search and core API response shapes for NFL athletes.

use serde::Deserialize;

/// `/apis/search/v2`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchBucket>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchBucket {
    #[serde(default)]
    pub contents: Vec<SearchEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEntry {
    /// Composite id, e.g. `s:20~l:28~a:3139477`.
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

impl SearchResponse {
    /// First content entry of the first result bucket.
    pub fn first_entry(&self) -> Option<&SearchEntry> {
        self.results.first()?.contents.first()
    }
}

/// `/v2/sports/football/leagues/nfl/athletes/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteDetail {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub position: Option<AthletePosition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthletePosition {
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl AthleteDetail {
    pub fn position_abbreviation(&self) -> Option<String> {
        self.position.as_ref().and_then(|p| p.abbreviation.clone())
    }
}

/// `/v2/sports/football/leagues/nfl/athletes/{id}/statistics`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AthleteStatistics {
    #[serde(default)]
    pub splits: Option<StatSplits>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatSplits {
    #[serde(default)]
    pub categories: Vec<StatCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stat {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "shortDisplayName", default)]
    pub short_display_name: Option<String>,
    #[serde(rename = "displayValue", default)]
    pub display_value: Option<String>,
}

impl AthleteStatistics {
    pub fn categories(&self) -> &[StatCategory] {
        self.splits
            .as_ref()
            .map(|s| s.categories.as_slice())
            .unwrap_or(&[])
    }
}
