//! Database model for the event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored event row from the `event_log` table.
///
/// Rows are insert-only: created once per successfully parsed event,
/// never updated or deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogRecord {
    /// Auto-increment row ID.
    pub id: i64,
    /// Event type tag from the `detail-type` field (`"Unknown"` default).
    /// The column is nullable; rows written by this system always carry a
    /// tag.
    pub detail_type: Option<String>,
    /// Full event payload as JSONB.
    pub payload: serde_json::Value,
    /// Server-assigned timestamp of receipt.
    pub received_at: DateTime<Utc>,
}
