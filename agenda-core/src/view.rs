//! Presentation capability for the event list.
//!
//! The core never renders anything itself; it asks an implementation of
//! `ListView` to mirror registry changes. Implementations are purely
//! presentational and must not touch the store or registry.

use crate::event::Event;

pub trait ListView {
    /// Show a newly created event at the end of the visible list.
    fn append(&mut self, event: &Event);

    /// Update the displayed title/description/due date of an existing item
    /// without rebuilding or moving it.
    fn patch(&mut self, id: &str, event: &Event);

    /// Remove the visible item for `id`.
    fn remove_item(&mut self, id: &str);
}

/// A view that displays nothing. Useful when a caller only needs the
/// registry side effects.
pub struct NullView;

impl ListView for NullView {
    fn append(&mut self, _event: &Event) {}
    fn patch(&mut self, _id: &str, _event: &Event) {}
    fn remove_item(&mut self, _id: &str) {}
}
