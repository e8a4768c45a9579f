use agenda_core::agenda::Agenda;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{format_due_label, short_id};

pub fn run() -> Result<()> {
    let agenda = Agenda::load()?;
    let registry = agenda.registry();

    // Current weekday and date header
    let now = chrono::Local::now();
    println!("{}", now.format("%A").to_string().bold());
    println!("{}", now.format("%-d %b %Y").to_string().dimmed());
    println!();

    if registry.is_empty() {
        println!("{}", "No events yet".dimmed());
        println!(
            "\nAdd your first one with:\n  \
            agenda add"
        );
        return Ok(());
    }

    for event in registry.all() {
        let due = format!("· due {}", format_due_label(&event.due_date));
        println!(
            "  {}  {} {}",
            short_id(&event.id).dimmed(),
            event.title.bold(),
            due.dimmed()
        );
        if !event.description.is_empty() {
            println!("            {}", event.description);
        }
    }

    Ok(())
}
