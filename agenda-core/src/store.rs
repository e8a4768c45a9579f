//! Durable local event storage.
//!
//! The full event collection is persisted as one JSON document. Every save
//! overwrites the whole document, so the file is always the exact
//! serialization of the registry that last wrote it.

use std::path::{Path, PathBuf};

use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;

/// Filename of the event document inside the data directory.
pub const EVENTS_FILE: &str = "events.json";

/// Reads and writes the serialized event collection.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Store { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection.
    ///
    /// A missing, unreadable, or unparseable document degrades to an empty
    /// collection and is never surfaced as an error.
    pub fn load(&self) -> Vec<Event> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Persist the full collection, replacing prior content.
    ///
    /// Writes to a temp file and renames it into place, so a crash mid-write
    /// leaves the previous document intact.
    pub fn save(&self, events: &[Event]) -> AgendaResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| AgendaError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> Store {
        Store::new(dir.join(EVENTS_FILE))
    }

    #[test]
    fn test_load_on_first_run_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_on_corrupt_document_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        std::fs::write(store.path(), "{not json!").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let events = vec![
            Event::new("Standup", "daily sync", "2024-05-01"),
            Event::new("Retro", "sprint retro", "2024-05-03"),
        ];
        store.save(&events).unwrap();

        assert_eq!(store.load(), events);
    }

    #[test]
    fn test_save_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join(EVENTS_FILE));

        store
            .save(&[Event::new("Standup", "daily sync", "2024-05-01")])
            .unwrap();

        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_persisted_document_uses_due_date_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store
            .save(&[Event::new("Standup", "daily sync", "2024-05-01")])
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"dueDate\""));
    }
}
