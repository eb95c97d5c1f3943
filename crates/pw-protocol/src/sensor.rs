use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for ingesting a sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDataCreate {
    /// Pot the reading belongs to. Not checked for existence.
    pub pot_id: i32,
    pub moisture: f64,
    pub light: f64,
    pub temperature: f64,
}

/// A persisted sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    /// Server-assigned identifier.
    pub id: i32,
    pub pot_id: i32,
    pub moisture: f64,
    pub light: f64,
    pub temperature: f64,
    /// Insert time, server clock (UTC).
    pub timestamp: DateTime<Utc>,
}

impl SensorData {
    /// Build the stored reading for `input`, as assigned at insert time.
    pub fn from_create(id: i32, input: &SensorDataCreate, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            pot_id: input.pot_id,
            moisture: input.moisture,
            light: input.light,
            temperature: input.temperature,
            timestamp,
        }
    }
}
