use serde::{Deserialize, Serialize};

/// A single build-audit event, serialised as one JSON line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildAuditEntry {
    pub id: uuid::Uuid,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub event_type: BuildEventType,
    pub details: serde_json::Value,
}

impl BuildAuditEntry {
    /// Create a new entry with an auto-generated UUID v4 and the current UTC
    /// timestamp.  The caller supplies the event type and free-form details.
    pub fn new(event_type: BuildEventType, details: serde_json::Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            timestamp: chrono::Utc::now(),
            event_type,
            details,
        }
    }
}

/// The category of build event being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildEventType {
    BuildStarted,
    InvalidLevelInput,
    CollectionFiltered,
    BuildCompleted,
}
