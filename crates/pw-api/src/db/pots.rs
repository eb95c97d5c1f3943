//! Pot queries.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use pw_protocol::{Pot, PotCreate};

/// Pot row returned from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PotRow {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PotRow> for Pot {
    fn from(row: PotRow) -> Self {
        Pot {
            id: row.id,
            name: row.name,
            location: row.location,
            created_at: row.created_at,
        }
    }
}

/// Insert a new pot stamped with `created_at` and return the stored row.
pub async fn insert(
    conn: &mut PgConnection,
    input: &PotCreate,
    created_at: DateTime<Utc>,
) -> Result<PotRow, sqlx::Error> {
    sqlx::query_as::<_, PotRow>(
        "INSERT INTO pots (name, location, created_at)
         VALUES ($1, $2, $3)
         RETURNING id, name, location, created_at",
    )
    .bind(&input.name)
    .bind(&input.location)
    .bind(created_at)
    .fetch_one(conn)
    .await
}
