//! Sensor reading queries.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use pw_protocol::{SensorData, SensorDataCreate};

/// Sensor reading row returned from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SensorDataRow {
    pub id: i32,
    pub pot_id: i32,
    pub moisture: f64,
    pub light: f64,
    pub temperature: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<SensorDataRow> for SensorData {
    fn from(row: SensorDataRow) -> Self {
        SensorData {
            id: row.id,
            pot_id: row.pot_id,
            moisture: row.moisture,
            light: row.light,
            temperature: row.temperature,
            timestamp: row.timestamp,
        }
    }
}

/// Insert one reading stamped with `timestamp` and return the stored row.
pub async fn insert(
    conn: &mut PgConnection,
    input: &SensorDataCreate,
    timestamp: DateTime<Utc>,
) -> Result<SensorDataRow, sqlx::Error> {
    sqlx::query_as::<_, SensorDataRow>(
        "INSERT INTO sensor_data (pot_id, moisture, light, temperature, timestamp)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, pot_id, moisture, light, temperature, timestamp",
    )
    .bind(input.pot_id)
    .bind(input.moisture)
    .bind(input.light)
    .bind(input.temperature)
    .bind(timestamp)
    .fetch_one(conn)
    .await
}

/// All readings for a pot, most recent first.
pub async fn list_for_pot(
    conn: &mut PgConnection,
    pot_id: i32,
) -> Result<Vec<SensorDataRow>, sqlx::Error> {
    sqlx::query_as::<_, SensorDataRow>(
        "SELECT id, pot_id, moisture, light, temperature, timestamp
         FROM sensor_data
         WHERE pot_id = $1
         ORDER BY timestamp DESC, id DESC",
    )
    .bind(pot_id)
    .fetch_all(conn)
    .await
}
