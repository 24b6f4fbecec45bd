//! The cross-sport player summary and its open-ended stat block.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cli::types::Sport;

/// Placeholder for any stat or position the provider did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Stat code (e.g. `AVG`, `PPG`, `YDS`) to display value.
///
/// The set of keys differs per sport, so consumers must treat it as an open
/// mapping. Keys serialize in sorted order.
pub type StatBlock = BTreeMap<String, StatValue>;

/// A single displayable stat value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// Nested group, e.g. MLB `hitting` / `pitching`.
    Block(StatBlock),
}

impl StatValue {
    pub fn not_available() -> Self {
        StatValue::Text(NOT_AVAILABLE.to_string())
    }

    /// Carry a raw provider value through unchanged where possible.
    ///
    /// `null` (and anything that is not a scalar) becomes "N/A".
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => StatValue::Text(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => StatValue::Int(i),
                None => n
                    .as_f64()
                    .map(StatValue::Float)
                    .unwrap_or_else(StatValue::not_available),
            },
            Value::Bool(b) => StatValue::Text(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => StatValue::not_available(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Int(i) => Some(*i as f64),
            StatValue::Float(f) => Some(*f),
            StatValue::Text(_) | StatValue::Block(_) => None,
        }
    }

    pub fn is_not_available(&self) -> bool {
        matches!(self, StatValue::Text(s) if s == NOT_AVAILABLE)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Int(value)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Float(value)
    }
}

impl From<StatBlock> for StatValue {
    fn from(value: StatBlock) -> Self {
        StatValue::Block(value)
    }
}

/// Normalized player response returned by every sport lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub sport: Sport,
    pub position: String,
    pub stats: StatBlock,
}

impl PlayerSummary {
    /// Build a summary; a missing or blank position is reported as "N/A".
    pub fn new(
        name: impl Into<String>,
        sport: Sport,
        position: Option<String>,
        stats: StatBlock,
    ) -> Self {
        let position = position
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            name: name.into(),
            sport,
            position,
            stats,
        }
    }
}
