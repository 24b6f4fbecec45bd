//! Mapping of lookup outcomes onto HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SportsError;

/// Errors the API reports to clients.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Sport must be mlb, nba, or nfl")]
    InvalidSport,

    #[error("Player '{name}' not found")]
    PlayerNotFound { name: String },

    #[error("{message}")]
    Upstream { message: String },
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidSport => StatusCode::BAD_REQUEST,
            ApiError::PlayerNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SportsError> for ApiError {
    fn from(err: SportsError) -> Self {
        match err {
            SportsError::InvalidSport { .. } => ApiError::InvalidSport,
            other => {
                let message = other.to_string();
                ApiError::Upstream {
                    message: if message.is_empty() {
                        "Upstream request failed".to_string()
                    } else {
                        message
                    },
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidSport.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::PlayerNotFound { name: "x".into() }.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Upstream { message: "x".into() }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_sports_error() {
        let invalid = ApiError::from(SportsError::InvalidSport {
            sport: "football".into(),
        });
        assert!(matches!(invalid, ApiError::InvalidSport));

        let not_found = ApiError::PlayerNotFound {
            name: "Nobody".into(),
        };
        assert_eq!(not_found.to_string(), "Player 'Nobody' not found");

        let upstream = ApiError::from(SportsError::malformed("nfl", "bad payload"));
        assert_eq!(upstream.to_string(), "Malformed nfl response: bad payload");
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_empty_upstream_message_is_replaced() {
        let err = ApiError::from(SportsError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "",
        )));
        assert!(!err.to_string().is_empty());
    }
}
