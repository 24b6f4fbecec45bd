//! Error types for the Rosetta Sports API

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SportsError>;

#[derive(Error, Debug)]
pub enum SportsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error("Sport must be mlb, nba, or nfl")]
    InvalidSport { sport: String },

    #[error("Malformed {provider} response: {message}")]
    MalformedResponse {
        provider: &'static str,
        message: String,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidConfig { key: String, message: String },
}

impl SportsError {
    pub fn malformed(provider: &'static str, message: impl Into<String>) -> Self {
        SportsError::MalformedResponse {
            provider,
            message: message.into(),
        }
    }
}
