use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for creating a pot.
///
/// Carries no `id` or `created_at`: both are assigned by the server, and
/// any such fields in an incoming body are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotCreate {
    /// Display name of the pot.
    pub name: String,
    /// Where the pot lives (e.g., "kitchen window").
    #[serde(default)]
    pub location: Option<String>,
}

impl PotCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A persisted pot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    /// Server-assigned identifier.
    pub id: i32,
    pub name: String,
    /// Serialized as `null` when absent.
    pub location: Option<String>,
    /// Insert time, server clock (UTC).
    pub created_at: DateTime<Utc>,
}
