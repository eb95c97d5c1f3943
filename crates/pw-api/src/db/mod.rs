//! Database access layer for PostgreSQL.
//!
//! [`ConnectionProvider`] hands out pooled connections; each sub-module
//! provides typed statements that run on one borrowed connection.

pub mod pots;
pub mod sensor_data;

use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use crate::config::ApiConfig;

/// Source of database connections for request handlers.
///
/// `connection()` never fails loudly: errors are logged and surface as
/// `None`, which callers must check before running a statement.
#[derive(Clone)]
pub struct ConnectionProvider {
    pool: Option<PgPool>,
}

impl ConnectionProvider {
    /// Build a lazily connecting pool from `config`.
    ///
    /// Nothing is dialed here. A missing or malformed connection string is
    /// logged once and leaves the provider permanently returning `None`.
    pub fn new(config: &ApiConfig) -> Self {
        let Some(database_url) = config.database_url.as_deref() else {
            tracing::error!("no database connection string configured");
            return Self { pool: None };
        };

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy(database_url);

        match pool {
            Ok(pool) => Self { pool: Some(pool) },
            Err(e) => {
                tracing::error!(error = %e, "invalid database connection string");
                Self { pool: None }
            }
        }
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Acquire a connection, or `None` if one cannot be obtained.
    ///
    /// The connection returns to the pool when the guard is dropped.
    pub async fn connection(&self) -> Option<PoolConnection<Postgres>> {
        let pool = self.pool.as_ref()?;
        match pool.acquire().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                tracing::error!(error = %e, "error connecting to the database");
                None
            }
        }
    }

    /// Round-trip a trivial statement to check the database is reachable.
    pub async fn ping(&self) -> bool {
        let Some(mut conn) = self.connection().await else {
            return false;
        };
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&mut *conn)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database ping failed");
                false
            }
        }
    }
}
