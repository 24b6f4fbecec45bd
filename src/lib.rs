//! Rosetta Sports API Library
//!
//! A small aggregation service that looks up a player by name in one public
//! statistics provider per sport and returns a single normalized shape.
//!
//! ## Features
//!
//! - **MLB**: statsapi.mlb.com people search plus career hitting and pitching
//! - **NBA**: stats.nba.com roster index and career totals, averaged per game
//! - **NFL**: ESPN athlete search, detail and statistics
//! - **HTTP API**: `GET /player/{sport}/{name}` and `GET /health` on axum
//! - **Offline export**: career averages for every active NBA player in one JSON file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rosetta_sports::{core::UpstreamConfig, providers::Providers, Sport};
//!
//! # async fn example() -> rosetta_sports::Result<()> {
//! let providers = Providers::from_config(&UpstreamConfig::default())?;
//!
//! match providers.lookup(Sport::Mlb, "trout").await? {
//!     Some(summary) => println!("{} ({})", summary.name, summary.position),
//!     None => println!("not found"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ROSETTA_BIND=0.0.0.0:5000
//! export ROSETTA_TIMEOUT_SECS=10
//! export RUST_LOG=info,rosetta_sports=debug
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod providers;

// Re-export commonly used types
pub use cli::types::{MlbPersonId, NbaPlayerId, NflAthleteId, Sport};
pub use error::{Result, SportsError};
pub use models::{PlayerSummary, StatBlock, StatValue};
