//! The event form state machine.
//!
//! One reusable form serves both creation and editing. The controller owns
//! the current mode explicitly; submission turns a draft into a registry
//! upsert and the matching view update.

use chrono::NaiveDate;

use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;
use crate::registry::Registry;
use crate::view::ListView;

/// Date formats accepted when normalizing a stored due date for editing.
const DUE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%B %d, %Y", "%m/%d/%Y"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Creating,
    Editing(String),
}

/// Field values read from the form surface, not yet an event.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

pub struct FormController {
    state: FormState,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        FormController {
            state: FormState::Closed,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Open the form in create mode with empty fields.
    ///
    /// Opening replaces any form already in progress.
    pub fn open_create(&mut self) -> Draft {
        self.state = FormState::Creating;
        Draft::default()
    }

    /// Open the form in edit mode, pre-populated from the record.
    ///
    /// The stored due date is normalized to `YYYY-MM-DD`; a value that
    /// cannot be parsed comes back as an empty field.
    pub fn open_edit(&mut self, event: &Event) -> Draft {
        self.state = FormState::Editing(event.id.clone());
        Draft {
            title: event.title.clone(),
            description: event.description.clone(),
            due_date: normalize_due_date(&event.due_date),
        }
    }

    /// Close the form without submitting. Fields are discarded.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    /// Submit the draft: upsert into the registry and mirror the change in
    /// the view, then close the form.
    ///
    /// In create mode the event gets a fresh id and is appended to the view;
    /// in edit mode it keeps the edited record's id and the existing item is
    /// patched in place.
    pub fn submit(
        &mut self,
        draft: Draft,
        registry: &mut Registry,
        view: &mut dyn ListView,
    ) -> AgendaResult<Event> {
        let event = match &self.state {
            FormState::Closed => return Err(AgendaError::FormClosed),
            FormState::Creating => Event::new(draft.title, draft.description, draft.due_date),
            FormState::Editing(id) => Event {
                id: id.clone(),
                title: draft.title,
                description: draft.description,
                due_date: draft.due_date,
            },
        };

        let is_edit = matches!(self.state, FormState::Editing(_));
        registry.upsert(event.clone())?;

        if is_edit {
            view.patch(&event.id, &event);
        } else {
            view.append(&event);
        }

        self.state = FormState::Closed;
        Ok(event)
    }
}

/// Normalize a due date string to `YYYY-MM-DD`.
///
/// Returns an empty string when the value parses under none of the accepted
/// formats, leaving the caller with a visibly blank field rather than a
/// fabricated date.
pub fn normalize_due_date(raw: &str) -> String {
    let trimmed = raw.trim();

    for format in DUE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    String::new()
}
