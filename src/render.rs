//! Terminal rendering for agenda types.
//!
//! This module provides colored rendering of events with owo_colors, plus
//! `TermList`, the terminal implementation of the core's `ListView`
//! capability.

use agenda_core::event::Event;
use agenda_core::view::ListView;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let due = format!("· due {}", format_due_label(&self.due_date));
        format!(
            "{}  {} {}",
            short_id(&self.id).dimmed(),
            self.title.bold(),
            due.dimmed()
        )
    }
}

/// First 8 characters of an event id, enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    &id[..8.min(id.len())]
}

/// Format a stored due date as a human-readable label (e.g. "Today",
/// "Tomorrow", "Wed Feb 25"). Unparseable values are shown as-is.
pub fn format_due_label(due_date: &str) -> String {
    let date = match NaiveDate::parse_from_str(due_date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return due_date.to_string(),
    };

    let today = chrono::Local::now().date_naive();
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Terminal list view: mirrors registry changes as colored one-liners.
pub struct TermList;

impl ListView for TermList {
    fn append(&mut self, event: &Event) {
        println!("  {} {}", "+".green(), event.render());
    }

    fn patch(&mut self, _id: &str, event: &Event) {
        println!("  {} {}", "~".yellow(), event.render());
    }

    fn remove_item(&mut self, id: &str) {
        println!("  {} {}", "-".red(), short_id(id).dimmed());
    }
}
