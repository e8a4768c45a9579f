use agenda_core::agenda::Agenda;
use agenda_core::form::FormController;
use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::input;
use crate::render::TermList;

pub fn run(
    id: &str,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
) -> Result<()> {
    let agenda = Agenda::load()?;
    let mut registry = agenda.registry();

    let current = super::resolve_event(&registry, id)?.clone();

    let mut form = FormController::new();
    let mut draft = form.open_edit(&current);

    // Prompts default to the record's current values, so pressing enter
    // keeps a field as it is.
    draft.title = match title {
        Some(t) => t,
        None => Input::new()
            .with_prompt("  Title")
            .default(draft.title.clone())
            .interact_text()?,
    };

    draft.description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("  Description")
            .default(draft.description.clone())
            .interact_text()?,
    };

    draft.due_date = match due {
        Some(d) => input::parse_due_date_normalized(&d)?,
        None => {
            let initial = draft.due_date.clone();
            input::prompt_due_date("  When is it due?", Some(&initial))?
        }
    };

    let mut view = TermList;
    let event = form.submit(draft, &mut registry, &mut view)?;

    println!();
    println!("{}", format!("  Updated: {}", event.title).yellow());

    Ok(())
}
