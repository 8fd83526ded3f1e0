use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged change on a watched entry (status change, rating change, ...).
///
/// Activity is append-only: the server creates it, the client only ever
/// pushes new records onto the owning entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u64,
    #[serde(default)]
    pub watched_id: u64,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Server-supplied payload, usually the new value of the changed field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub created_at: DateTime<Utc>,
}
