//! Upstream player identifiers.
//!
//! Each provider resolves a free-text name to its own kind of id, which is
//! only used to chain the next request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker preceding the athlete id inside an ESPN composite uid.
const ATHLETE_UID_MARKER: &str = "~a:";

/// MLB Stats API person id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MlbPersonId(pub u64);

impl MlbPersonId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MlbPersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NBA stats player (person) id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NbaPlayerId(pub u64);

impl NbaPlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NbaPlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ESPN athlete id, as embedded in a search result uid.
///
/// # Examples
///
/// ```rust
/// use rosetta_sports::NflAthleteId;
///
/// let id = NflAthleteId::from_uid("s:20~l:28~a:3139477").unwrap();
/// assert_eq!(id.as_str(), "3139477");
/// assert!(NflAthleteId::from_uid("s:20~l:28").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NflAthleteId(String);

impl NflAthleteId {
    /// Extract the athlete id following the last `~a:` marker.
    ///
    /// Returns `None` when the marker is missing or nothing follows it.
    pub fn from_uid(uid: &str) -> Option<Self> {
        let (_, id) = uid.rsplit_once(ATHLETE_UID_MARKER)?;
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NflAthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
