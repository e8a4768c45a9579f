//! Deletion confirmation flow.
//!
//! Destructive removal is gated behind a two-state interaction: a delete
//! request marks a target as pending, and only an explicit confirm mutates
//! the registry. At most one target is pending at a time.

use crate::error::AgendaResult;
use crate::event::Event;
use crate::registry::Registry;
use crate::view::ListView;

#[derive(Default)]
pub struct DeleteConfirmation {
    target: Option<String>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an event as the pending deletion target.
    ///
    /// A request while another target is pending overwrites it; the last
    /// request wins.
    pub fn request(&mut self, id: impl Into<String>) {
        self.target = Some(id.into());
    }

    /// The currently pending target, if any.
    pub fn pending(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The pending target resolved to its record, if it still exists.
    pub fn pending_event<'a>(&self, registry: &'a Registry) -> Option<&'a Event> {
        self.target.as_deref().and_then(|id| registry.get(id))
    }

    /// Confirm the pending deletion: remove the target from the registry and
    /// the view, and return its id. Returns `None` when nothing is pending.
    pub fn confirm(
        &mut self,
        registry: &mut Registry,
        view: &mut dyn ListView,
    ) -> AgendaResult<Option<String>> {
        match self.target.take() {
            Some(id) => {
                registry.remove(&id)?;
                view.remove_item(&id);
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Dismiss the prompt without deleting anything.
    pub fn cancel(&mut self) {
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::view::NullView;

    fn test_registry(dir: &std::path::Path) -> Registry {
        Registry::load(Store::new(dir.join(crate::store::EVENTS_FILE)))
    }

    #[test]
    fn test_request_alone_does_not_mutate() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());
        let event = Event::new("Standup", "daily sync", "2024-05-01");
        let id = event.id.clone();
        registry.upsert(event).unwrap();

        let mut flow = DeleteConfirmation::new();
        flow.request(id.clone());

        assert_eq!(flow.pending(), Some(id.as_str()));
        assert_eq!(flow.pending_event(&registry).unwrap().title, "Standup");
        assert_eq!(registry.all().len(), 1);
    }

    #[test]
    fn test_confirm_removes_and_clears_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());
        let event = Event::new("Standup", "daily sync", "2024-05-01");
        let id = event.id.clone();
        registry.upsert(event).unwrap();

        let mut flow = DeleteConfirmation::new();
        flow.request(id.clone());
        let removed = flow.confirm(&mut registry, &mut NullView).unwrap();

        assert_eq!(removed, Some(id));
        assert!(registry.is_empty());
        assert_eq!(flow.pending(), None);

        // Confirming again with nothing pending is a no-op
        let removed = flow.confirm(&mut registry, &mut NullView).unwrap();
        assert_eq!(removed, None);
    }

    #[test]
    fn test_cancel_leaves_collection_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());
        let event = Event::new("Standup", "daily sync", "2024-05-01");
        let id = event.id.clone();
        registry.upsert(event).unwrap();

        let mut flow = DeleteConfirmation::new();
        flow.request(id);
        flow.cancel();

        assert_eq!(flow.pending(), None);
        assert_eq!(registry.all().len(), 1);

        // Confirm after cancel must not delete anything
        flow.confirm(&mut registry, &mut NullView).unwrap();
        assert_eq!(registry.all().len(), 1);
    }

    #[test]
    fn test_last_request_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = test_registry(dir.path());
        let first = Event::new("First", "a", "2024-05-01");
        let second = Event::new("Second", "b", "2024-05-02");
        let first_id = first.id.clone();
        let second_id = second.id.clone();
        registry.upsert(first).unwrap();
        registry.upsert(second).unwrap();

        let mut flow = DeleteConfirmation::new();
        flow.request(first_id.clone());
        flow.request(second_id.clone());

        let removed = flow.confirm(&mut registry, &mut NullView).unwrap();
        assert_eq!(removed, Some(second_id));
        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.all()[0].id, first_id);
    }
}
