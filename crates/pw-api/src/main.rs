//! PotWatch API — pot registry and sensor reading REST server.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pw_api::config::{self, ApiConfig};
use pw_api::routes;
use pw_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before the subscriber, so RUST_LOG from .env applies.
    let dotenv_path = config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pw-api starting");

    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    let config = ApiConfig::from_env();
    let state = AppState::from_config(&config);
    let app = routes::build_router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
