//! The event record.
//!
//! An event is a single task/calendar entry. The serde field names match the
//! persisted document layout (`dueDate`), so the on-disk form round-trips
//! byte-for-byte with what older stores wrote.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task/calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique within the registry, assigned at creation, immutable after.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date string, normalized form `YYYY-MM-DD`.
    pub due_date: String,
}

impl Event {
    /// Create a new event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
        }
    }
}
