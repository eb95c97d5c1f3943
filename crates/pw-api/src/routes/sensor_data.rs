//! Sensor reading ingestion and listing endpoints.

use axum::Json;
use axum::extract::{Path, State};

use pw_protocol::{SensorData, SensorDataCreate};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /sensor-data/ — store one reading.
pub async fn ingest_reading(
    State(state): State<AppState>,
    Json(req): Json<SensorDataCreate>,
) -> ApiResult<Json<SensorData>> {
    let reading = state.store.record_reading(&req).await?;
    tracing::debug!(
        reading_id = reading.id,
        pot_id = reading.pot_id,
        "sensor reading stored"
    );
    Ok(Json(reading))
}

/// GET /pots/{pot_id}/sensor-data/ — readings for a pot, newest first.
pub async fn list_readings(
    State(state): State<AppState>,
    Path(pot_id): Path<i32>,
) -> ApiResult<Json<Vec<SensorData>>> {
    let readings = state.store.readings_for_pot(pot_id).await?;
    tracing::debug!(pot_id, count = readings.len(), "sensor readings listed");
    Ok(Json(readings))
}
