//! Status and health check endpoints.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;
use crate::store::StoreBackend;

/// GET / — static status message.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "PotWatch API is running" }))
}

/// GET /health — liveness check, including database reachability.
///
/// Always 200; a down database is reported in the body.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let database = match state.store.backend() {
        StoreBackend::Memory => "memory",
        StoreBackend::Postgres => {
            if state.store.ping().await {
                "up"
            } else {
                "down"
            }
        }
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    }))
}
