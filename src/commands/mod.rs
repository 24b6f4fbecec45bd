//! Command implementations for the Rosetta Sports CLI

pub mod build_nba_cache;
pub mod serve;
