//! Supported sports.

use crate::error::{Result, SportsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sport the API can look players up for.
///
/// Parsing is case-insensitive (`MLB`, `mlb` and `Mlb` are the same sport);
/// serialization is always upper-case, matching the `sport` field of a
/// player summary.
///
/// # Examples
///
/// ```rust
/// use rosetta_sports::Sport;
///
/// let sport: Sport = "Nba".parse().unwrap();
/// assert_eq!(sport, Sport::Nba);
/// assert_eq!(sport.to_string(), "NBA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    Mlb,
    Nba,
    Nfl,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sport::Mlb => "MLB",
            Sport::Nba => "NBA",
            Sport::Nfl => "NFL",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Sport {
    type Err = SportsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mlb" => Ok(Sport::Mlb),
            "nba" => Ok(Sport::Nba),
            "nfl" => Ok(Sport::Nfl),
            _ => Err(SportsError::InvalidSport {
                sport: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_parse_is_case_insensitive() {
        for raw in ["MLB", "mlb", "Mlb", "mLb"] {
            assert_eq!(raw.parse::<Sport>().unwrap(), Sport::Mlb);
        }
        assert_eq!("NBA".parse::<Sport>().unwrap(), Sport::Nba);
        assert_eq!("nfl".parse::<Sport>().unwrap(), Sport::Nfl);
    }

    #[test]
    fn test_sport_parse_rejects_unknown() {
        for raw in ["football", "NHL", "", "ml b"] {
            match raw.parse::<Sport>() {
                Err(SportsError::InvalidSport { sport }) => assert_eq!(sport, raw),
                other => panic!("Expected InvalidSport, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_sport_display_and_serde_are_upper_case() {
        assert_eq!(Sport::Nfl.to_string(), "NFL");
        assert_eq!(serde_json::to_string(&Sport::Mlb).unwrap(), "\"MLB\"");
        let parsed: Sport = serde_json::from_str("\"NBA\"").unwrap();
        assert_eq!(parsed, Sport::Nba);
    }
}
