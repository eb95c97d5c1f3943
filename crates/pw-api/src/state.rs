//! Shared application state for the Axum server.
//!
//! Supports two modes:
//! - **Database mode**: handlers go through a `PgStore` (production).
//! - **In-memory mode**: handlers go through a `MemoryStore` (tests only,
//!   via `new` / `with_store`).

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::ConnectionProvider;
use crate::store::{MemoryStore, PgStore, PotStore};

/// Shared application state, cheap to clone into each handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PotStore>,
}

impl AppState {
    /// Create state over an arbitrary store.
    pub fn with_store(store: Arc<dyn PotStore>) -> Self {
        Self { store }
    }

    /// Create state backed by PostgreSQL through `provider`.
    pub fn with_provider(provider: ConnectionProvider) -> Self {
        Self::with_store(Arc::new(PgStore::new(provider)))
    }

    /// Production state: PostgreSQL through a provider built from `config`.
    ///
    /// A missing or malformed connection string still yields a `PgStore`;
    /// every data request then fails with `ConnectionFailed`.
    pub fn from_config(config: &ApiConfig) -> Self {
        if config.database_url.is_none() {
            tracing::warn!("DATABASE_URL not set; data endpoints will fail");
        }
        Self::with_provider(ConnectionProvider::new(config))
    }

    /// Create in-memory state (for tests).
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
