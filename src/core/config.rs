//! Service configuration.
//!
//! Values start from built-in defaults, are overridden by `ROSETTA_*`
//! environment variables, and finally by CLI flags (see [`crate::cli`]).

use std::net::SocketAddr;
use std::time::Duration;

use crate::{error::SportsError, Result};

pub const SERVICE_NAME: &str = "Rosetta Sports API";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_NBA_SEASON: &str = "2025-26";

pub const MLB_BASE_URL: &str = "https://statsapi.mlb.com";
pub const NBA_BASE_URL: &str = "https://stats.nba.com";
pub const ESPN_SEARCH_BASE_URL: &str = "https://site.web.api.espn.com";
pub const ESPN_CORE_BASE_URL: &str = "https://sports.core.api.espn.com";

pub const BIND_ENV_VAR: &str = "ROSETTA_BIND";
pub const TIMEOUT_ENV_VAR: &str = "ROSETTA_TIMEOUT_SECS";
pub const MLB_BASE_URL_ENV_VAR: &str = "ROSETTA_MLB_BASE_URL";
pub const NBA_BASE_URL_ENV_VAR: &str = "ROSETTA_NBA_BASE_URL";
pub const NBA_SEASON_ENV_VAR: &str = "ROSETTA_NBA_SEASON";
pub const ESPN_SEARCH_BASE_URL_ENV_VAR: &str = "ROSETTA_ESPN_SEARCH_BASE_URL";
pub const ESPN_CORE_BASE_URL_ENV_VAR: &str = "ROSETTA_ESPN_CORE_BASE_URL";

/// Where and how to reach the upstream statistics providers.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamConfig {
    pub mlb_base_url: String,
    pub nba_base_url: String,
    pub nba_season: String,
    pub espn_search_base_url: String,
    pub espn_core_base_url: String,
    /// Applied to every upstream request.
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            mlb_base_url: MLB_BASE_URL.to_string(),
            nba_base_url: NBA_BASE_URL.to_string(),
            nba_season: DEFAULT_NBA_SEASON.to_string(),
            espn_search_base_url: ESPN_SEARCH_BASE_URL.to_string(),
            espn_core_base_url: ESPN_CORE_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl UpstreamConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            config.timeout = parse_timeout(&raw)?;
        }
        if let Some(url) = lookup(MLB_BASE_URL_ENV_VAR) {
            config.mlb_base_url = url;
        }
        if let Some(url) = lookup(NBA_BASE_URL_ENV_VAR) {
            config.nba_base_url = url;
        }
        if let Some(season) = lookup(NBA_SEASON_ENV_VAR) {
            config.nba_season = season;
        }
        if let Some(url) = lookup(ESPN_SEARCH_BASE_URL_ENV_VAR) {
            config.espn_search_base_url = url;
        }
        if let Some(url) = lookup(ESPN_CORE_BASE_URL_ENV_VAR) {
            config.espn_core_base_url = url;
        }

        Ok(config)
    }
}

/// Configuration for the HTTP API.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    pub service_name: String,
    pub upstream: UpstreamConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup(BIND_ENV_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Self {
            bind: bind.parse()?,
            service_name: SERVICE_NAME.to_string(),
            upstream: UpstreamConfig::from_lookup(lookup)?,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(SportsError::InvalidConfig {
            key: TIMEOUT_ENV_VAR.to_string(),
            message: format!("expected a positive number of seconds, got '{}'", raw),
        }),
    }
}
