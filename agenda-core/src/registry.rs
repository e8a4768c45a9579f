//! The in-memory event registry.
//!
//! Authoritative ordered collection for the session. Every mutating call
//! persists the full collection through the store before returning, so the
//! document on disk never drifts from what is in memory.

use crate::error::AgendaResult;
use crate::event::Event;
use crate::store::Store;

pub struct Registry {
    store: Store,
    events: Vec<Event>,
}

impl Registry {
    /// Load the registry from the store's persisted document.
    pub fn load(store: Store) -> Self {
        let events = store.load();
        Registry { store, events }
    }

    /// Insert or update an event, keyed by id.
    ///
    /// An existing event is replaced in place (position preserved); a new
    /// one is appended.
    pub fn upsert(&mut self, event: Event) -> AgendaResult<()> {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
        self.store.save(&self.events)
    }

    /// Remove the event with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> AgendaResult<()> {
        self.events.retain(|e| e.id != id);
        self.store.save(&self.events)
    }

    /// All events in insertion/update order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_registry(dir: &std::path::Path) -> Registry {
        Registry::load(Store::new(dir.join(crate::store::EVENTS_FILE)))
    }

    #[test]
    fn test_creates_accumulate_with_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());

        for n in 0..5 {
            let event = Event::new(format!("Task {n}"), "desc", "2024-05-01");
            registry.upsert(event).unwrap();
        }

        assert_eq!(registry.all().len(), 5);
        let ids: HashSet<_> = registry.all().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_upsert_existing_id_replaces_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());

        let first = Event::new("First", "a", "2024-05-01");
        let second = Event::new("Second", "b", "2024-05-02");
        let third = Event::new("Third", "c", "2024-05-03");
        let target_id = second.id.clone();

        registry.upsert(first).unwrap();
        registry.upsert(second).unwrap();
        registry.upsert(third).unwrap();

        let edited = Event {
            id: target_id.clone(),
            title: "Second v2".to_string(),
            description: "b2".to_string(),
            due_date: "2024-06-01".to_string(),
        };
        registry.upsert(edited).unwrap();

        assert_eq!(registry.all().len(), 3);
        assert_eq!(registry.all()[1].id, target_id);
        assert_eq!(registry.all()[1].title, "Second v2");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());

        let event = Event::new("Standup", "daily sync", "2024-05-01");
        let keeper = Event::new("Retro", "sprint retro", "2024-05-03");
        let id = event.id.clone();

        registry.upsert(event).unwrap();
        registry.upsert(keeper).unwrap();

        registry.remove(&id).unwrap();
        let after_first: Vec<_> = registry.all().to_vec();
        registry.remove(&id).unwrap();

        assert_eq!(registry.all(), after_first.as_slice());
        assert_eq!(registry.all().len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());

        registry
            .upsert(Event::new("Standup", "daily sync", "2024-05-01"))
            .unwrap();
        registry.remove("no-such-id").unwrap();

        assert_eq!(registry.all().len(), 1);
    }

    #[test]
    fn test_mutations_are_persisted_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());

        let event = Event::new("Standup", "daily sync", "2024-05-01");
        let id = event.id.clone();
        registry.upsert(event).unwrap();

        // A fresh registry over the same store sees the write
        let reloaded = test_registry(dir.path());
        assert_eq!(reloaded.all(), registry.all());

        registry.remove(&id).unwrap();
        let reloaded = test_registry(dir.path());
        assert!(reloaded.is_empty());
    }
}
