use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    api::{error::ApiError, state::AppState},
    cli::types::Sport,
    models::PlayerSummary,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// GET /player/{sport}/{name}
pub async fn get_player(
    State(state): State<AppState>,
    Path((sport, name)): Path<(String, String)>,
) -> Result<Json<PlayerSummary>, ApiError> {
    let sport: Sport = sport.parse()?;

    match state.providers.lookup(sport, &name).await {
        Ok(Some(summary)) => {
            info!(%sport, %name, "player found");
            Ok(Json(summary))
        }
        Ok(None) => {
            info!(%sport, %name, "player not found");
            Err(ApiError::PlayerNotFound { name })
        }
        Err(e) => {
            warn!(%sport, %name, error = %e, "lookup failed");
            Err(e.into())
        }
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: format!("{} is running", state.service_name),
    })
}
