use agenda_core::agenda::Agenda;
use agenda_core::confirm::DeleteConfirmation;
use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::{Render, TermList};

pub fn run(id: &str, force: bool) -> Result<()> {
    let agenda = Agenda::load()?;
    let mut registry = agenda.registry();

    let event = super::resolve_event(&registry, id)?.clone();

    let mut flow = DeleteConfirmation::new();
    flow.request(event.id.clone());

    // Confirm unless --force
    let confirmed = if force {
        true
    } else {
        println!("  {}", event.render());
        println!();
        Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", event.title))
            .default(false)
            .interact()?
    };

    if !confirmed {
        flow.cancel();
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let mut view = TermList;
    if flow.confirm(&mut registry, &mut view)?.is_some() {
        println!("{}", format!("  Deleted: {}", event.title).red());
    }

    Ok(())
}
