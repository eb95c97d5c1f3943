//! API route definitions and router builder.

pub mod health;
pub mod pots;
pub mod sensor_data;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/pots/", post(pots::create_pot))
        .route("/sensor-data/", post(sensor_data::ingest_reading))
        .route(
            "/pots/{pot_id}/sensor-data/",
            get(sensor_data::list_readings),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
