pub mod add;
pub mod delete;
pub mod edit;
pub mod list;

use agenda_core::event::Event;
use agenda_core::registry::Registry;
use anyhow::Result;

/// Resolve an event by exact id or unique id prefix.
pub fn resolve_event<'a>(registry: &'a Registry, id: &str) -> Result<&'a Event> {
    if registry.is_empty() {
        anyhow::bail!("No events found. Add your first one with:\n  agenda add");
    }

    if let Some(event) = registry.get(id) {
        return Ok(event);
    }

    let matches: Vec<&Event> = registry
        .all()
        .iter()
        .filter(|e| e.id.starts_with(id))
        .collect();

    match matches.as_slice() {
        [event] => Ok(event),
        [] => anyhow::bail!("No event matches id '{}'. See ids with: agenda list", id),
        _ => {
            let candidates: Vec<String> = matches
                .iter()
                .map(|e| format!("  {}  {}", &e.id[..8.min(e.id.len())], e.title))
                .collect();
            anyhow::bail!(
                "Id '{}' is ambiguous. Matching events:\n{}",
                id,
                candidates.join("\n")
            );
        }
    }
}
