//! Persistence seam between request handlers and storage.
//!
//! Two backends:
//! - **Postgres** ([`PgStore`]): one pooled connection and one statement per call.
//! - **Memory** ([`MemoryStore`]): process-local tables for tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use pw_protocol::{Pot, PotCreate, SensorData, SensorDataCreate};

use crate::error::ApiResult;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Which backend a store writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Storage operations behind the HTTP handlers.
///
/// Server-assigned fields (`id`, `created_at`, `timestamp`) are filled in
/// here; inputs never carry them.
#[async_trait]
pub trait PotStore: Send + Sync {
    /// Insert a pot and return it fully populated.
    async fn create_pot(&self, input: &PotCreate) -> ApiResult<Pot>;

    /// Insert a sensor reading and return it fully populated.
    /// `pot_id` is stored as given, without an existence check.
    async fn record_reading(&self, input: &SensorDataCreate) -> ApiResult<SensorData>;

    /// All readings for `pot_id`, most recent first. Unknown pots yield an
    /// empty list.
    async fn readings_for_pot(&self, pot_id: i32) -> ApiResult<Vec<SensorData>>;

    /// Whether the backing storage is reachable right now.
    async fn ping(&self) -> bool;

    fn backend(&self) -> StoreBackend;
}
