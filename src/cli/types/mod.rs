//! Type-safe wrappers for sports and upstream player identifiers.

pub mod ids;
pub mod sport;

pub use ids::{MlbPersonId, NbaPlayerId, NflAthleteId};
pub use sport::Sport;
