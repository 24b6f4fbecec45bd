//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sports_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = SportsError::from(json_error);

        match error {
            SportsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SportsError::from(io_error);

        match error {
            SportsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_addr_parse_error_conversion() {
        let parse_error = "not an address"
            .parse::<std::net::SocketAddr>()
            .unwrap_err();
        let error = SportsError::from(parse_error);

        match error {
            SportsError::InvalidAddress(_) => (),
            _ => panic!("Expected InvalidAddress error variant"),
        }
    }

    #[test]
    fn test_invalid_sport_message_is_fixed() {
        let error = SportsError::InvalidSport {
            sport: "football".to_string(),
        };

        assert_eq!(error.to_string(), "Sport must be mlb, nba, or nfl");
    }

    #[test]
    fn test_malformed_response_error() {
        let error = SportsError::malformed("nba", "missing SEASON_ID column");

        let error_string = error.to_string();
        assert!(error_string.contains("Malformed nba response"));
        assert!(error_string.contains("SEASON_ID"));
    }

    #[test]
    fn test_invalid_config_error() {
        let error = SportsError::InvalidConfig {
            key: "ROSETTA_TIMEOUT_SECS".to_string(),
            message: "expected a positive integer".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("ROSETTA_TIMEOUT_SECS"));
        assert!(error_string.contains("positive integer"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SportsError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(SportsError::InvalidSport {
                sport: "cricket".to_string(),
            })
        }

        match test_function().unwrap_err() {
            SportsError::InvalidSport { sport } => assert_eq!(sport, "cricket"),
            _ => panic!("Expected InvalidSport error"),
        }
    }
}
