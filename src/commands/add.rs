use agenda_core::agenda::Agenda;
use agenda_core::form::FormController;
use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::input;
use crate::render::TermList;

pub fn run(title: Option<String>, description: Option<String>, due: Option<String>) -> Result<()> {
    let agenda = Agenda::load()?;
    let mut registry = agenda.registry();

    let mut form = FormController::new();
    let mut draft = form.open_create();
    let interactive = title.is_none();

    // --- Title ---
    draft.title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Description ---
    draft.description = match description {
        Some(d) => d,
        None => Input::<String>::new()
            .with_prompt("  Description")
            .interact_text()?,
    };

    // --- Due date ---
    draft.due_date = match due {
        Some(d) => input::parse_due_date_normalized(&d)?,
        None => input::prompt_due_date("  When is it due?", None)?,
    };

    let mut view = TermList;
    let event = form.submit(draft, &mut registry, &mut view)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.title).green());

    Ok(())
}
