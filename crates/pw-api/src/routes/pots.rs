//! Pot endpoints.

use axum::Json;
use axum::extract::State;

use pw_protocol::{Pot, PotCreate};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /pots/ — create a pot.
pub async fn create_pot(
    State(state): State<AppState>,
    Json(req): Json<PotCreate>,
) -> ApiResult<Json<Pot>> {
    let pot = state.store.create_pot(&req).await?;
    tracing::info!(pot_id = pot.id, "pot created");
    Ok(Json(pot))
}
