use crate::{
    cli::types::Sport,
    models::{PlayerSummary, StatBlock, StatValue},
};

use super::types::{Person, StatLine};

/// Output code and MLB Stats API key for each hitting stat.
pub const HITTING_FIELDS: [(&str, &str); 5] = [
    ("AVG", "avg"),
    ("OPS", "ops"),
    ("HR", "homeRuns"),
    ("RBI", "rbi"),
    ("AB", "atBats"),
];

/// Output code and MLB Stats API key for each pitching stat.
pub const PITCHING_FIELDS: [(&str, &str); 4] = [
    ("ERA", "era"),
    ("WHIP", "whip"),
    ("SO", "strikeOuts"),
    ("W", "wins"),
];

/// Pick `fields` out of a stat line, "N/A" for anything missing.
pub fn pick_fields(stat: Option<&StatLine>, fields: &[(&str, &str)]) -> StatBlock {
    fields
        .iter()
        .map(|(code, key)| {
            let value = stat
                .and_then(|s| s.get(*key))
                .map(StatValue::from_json)
                .unwrap_or_else(StatValue::not_available);
            (code.to_string(), value)
        })
        .collect()
}

/// Hitting block; always has every field.
pub fn hitting_block(stat: Option<&StatLine>) -> StatBlock {
    pick_fields(stat, &HITTING_FIELDS)
}

/// Pitching block; empty when the player has no pitching line at all.
pub fn pitching_block(stat: Option<&StatLine>) -> StatBlock {
    match stat {
        Some(line) if !line.is_empty() => pick_fields(Some(line), &PITCHING_FIELDS),
        _ => StatBlock::new(),
    }
}

/// Assemble the MLB summary for a resolved person.
pub fn summarize(
    person: &Person,
    query: &str,
    hitting: Option<&StatLine>,
    pitching: Option<&StatLine>,
) -> PlayerSummary {
    let mut stats = StatBlock::new();
    stats.insert("hitting".to_string(), hitting_block(hitting).into());
    stats.insert("pitching".to_string(), pitching_block(pitching).into());

    let name = person
        .full_name
        .clone()
        .unwrap_or_else(|| query.to_string());

    PlayerSummary::new(name, Sport::Mlb, person.position_abbreviation(), stats)
}
