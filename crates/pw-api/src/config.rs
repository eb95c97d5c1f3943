//! API server configuration.
//!
//! Built once at startup and passed by reference; nothing reads the
//! environment after `from_env` returns.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Top-level API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// PostgreSQL connection URL. `None` leaves the server without a database.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: u32,
    /// How long a request waits for a pooled connection before giving up.
    pub db_acquire_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("POTWATCH_HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "POTWATCH_PORT", defaults.port),
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            db_max_connections: parse_or(
                &lookup,
                "POTWATCH_DB_MAX_CONNECTIONS",
                defaults.db_max_connections,
            ),
            db_acquire_timeout_secs: parse_or(
                &lookup,
                "POTWATCH_DB_ACQUIRE_TIMEOUT_SECS",
                defaults.db_acquire_timeout_secs,
            ),
        }
    }

    /// Socket address string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }
}

/// Seed the process environment from a local `.env` file, if present.
/// Variables that are already set are never overwritten.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid value, using default");
            default
        }),
        None => default,
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            db_max_connections: default_max_connections(),
            db_acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}
