//! Core utilities shared across the service
//!
//! - `cache`: NBA export file output
//! - `config`: service and upstream configuration
//! - `http`: shared HTTP client and request helpers

pub mod cache;
pub mod config;
pub mod http;

pub use cache::{write_json, write_string};
pub use config::{ServiceConfig, UpstreamConfig};
pub use http::{build_client, get_json, nba_stats_headers};
