//! Normalized response types shared by every sport.

pub mod summary;

pub use summary::{PlayerSummary, StatBlock, StatValue, NOT_AVAILABLE};
