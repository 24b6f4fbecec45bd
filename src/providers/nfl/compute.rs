use std::collections::BTreeMap;

use crate::{
    cli::types::Sport,
    models::{PlayerSummary, StatBlock, StatValue, NOT_AVAILABLE},
};

use super::types::{AthleteDetail, SearchEntry, StatCategory};

/// Stat keys reported for passers.
pub const PASSING_KEYS: [&str; 6] = ["YDS", "Touchdowns", "INT", "RTG", "CMP%", "ATT"];

/// Stat keys reported for rushers.
pub const RUSHING_KEYS: [&str; 3] = ["CAR", "Rushing Touchdowns", "YDS"];

pub const STATS_UNAVAILABLE: &str = "Stats unavailable";

/// Flatten every category into one map of display name to display value.
///
/// Keys use the short display name, falling back to the internal name.
/// When two categories share a key, the later category wins.
pub fn flatten_categories(categories: &[StatCategory]) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for category in categories {
        for stat in &category.stats {
            let key = stat
                .short_display_name
                .clone()
                .or_else(|| stat.name.clone())
                .unwrap_or_default();
            let value = stat
                .display_value
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            flat.insert(key, value);
        }
    }
    flat
}

fn pick(flat: &BTreeMap<String, String>, keys: &[&str]) -> StatBlock {
    keys.iter()
        .filter_map(|k| flat.get(*k).map(|v| (k.to_string(), StatValue::from(v.as_str()))))
        .collect()
}

/// Passing stats if any, else rushing stats, else everything, else a note.
pub fn select_stats(flat: &BTreeMap<String, String>) -> StatBlock {
    let passing = pick(flat, &PASSING_KEYS);
    if !passing.is_empty() {
        return passing;
    }

    let rushing = pick(flat, &RUSHING_KEYS);
    if !rushing.is_empty() {
        return rushing;
    }

    if !flat.is_empty() {
        return flat
            .iter()
            .map(|(k, v)| (k.clone(), StatValue::from(v.as_str())))
            .collect();
    }

    let mut note = StatBlock::new();
    note.insert("note".to_string(), StatValue::from(STATS_UNAVAILABLE));
    note
}

/// Assemble the NFL summary.
///
/// Name preference: athlete detail, then the search hit, then the query.
pub fn summarize(
    query: &str,
    entry: &SearchEntry,
    detail: &AthleteDetail,
    categories: &[StatCategory],
) -> PlayerSummary {
    let name = detail
        .display_name
        .clone()
        .or_else(|| entry.display_name.clone())
        .unwrap_or_else(|| query.to_string());

    let stats = select_stats(&flatten_categories(categories));

    PlayerSummary::new(name, Sport::Nfl, detail.position_abbreviation(), stats)
}
