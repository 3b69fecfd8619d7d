//! Contact Message Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored contact message (SQLite row)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Submitter id ("guest" or an auth uid)
    pub user_id: Option<String>,
    /// Assigned by the repository at write time
    pub created_at: DateTime<Utc>,
}

/// Contact form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageCreate {
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}
