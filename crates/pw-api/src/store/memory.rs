//! In-memory store (tests).

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use pw_protocol::{Pot, PotCreate, SensorData, SensorDataCreate};

use super::{PotStore, StoreBackend};
use crate::error::{ApiError, ApiResult};

/// Append-only tables guarded by a single lock. Ids start at 1.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    pots: Vec<Pot>,
    readings: Vec<SensorData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pots.
    pub async fn pot_count(&self) -> usize {
        self.tables.read().await.pots.len()
    }

    /// Number of stored readings across all pots.
    pub async fn reading_count(&self) -> usize {
        self.tables.read().await.readings.len()
    }
}

fn next_id(len: usize) -> ApiResult<i32> {
    i32::try_from(len + 1).map_err(|_| ApiError::QueryFailed("id sequence exhausted".into()))
}

#[async_trait]
impl PotStore for MemoryStore {
    async fn create_pot(&self, input: &PotCreate) -> ApiResult<Pot> {
        let mut tables = self.tables.write().await;
        let pot = Pot {
            id: next_id(tables.pots.len())?,
            name: input.name.clone(),
            location: input.location.clone(),
            created_at: Utc::now(),
        };
        tables.pots.push(pot.clone());
        Ok(pot)
    }

    async fn record_reading(&self, input: &SensorDataCreate) -> ApiResult<SensorData> {
        let mut tables = self.tables.write().await;
        let reading = SensorData::from_create(next_id(tables.readings.len())?, input, Utc::now());
        tables.readings.push(reading.clone());
        Ok(reading)
    }

    async fn readings_for_pot(&self, pot_id: i32) -> ApiResult<Vec<SensorData>> {
        let tables = self.tables.read().await;
        let mut readings: Vec<SensorData> = tables
            .readings
            .iter()
            .filter(|r| r.pot_id == pot_id)
            .cloned()
            .collect();
        // Same ordering as the SQL statement: newest first, id breaks ties.
        readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(readings)
    }

    async fn ping(&self) -> bool {
        true
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
