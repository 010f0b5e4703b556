//! Stored event commands: list, show, status, remove.

use eventline_core::{Event, EventStatus, OutputFormat, format_details, to_json};

use crate::actions;
use crate::error::{ClientError, ClientResult};
use crate::store::EventStore;

/// Lists every stored event, one per line.
pub fn list(store: &EventStore, format: OutputFormat) -> ClientResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(store.events())?),
        OutputFormat::Tty => {
            if store.events().is_empty() {
                println!("No events stored in {}.", store.path().display());
            }
            for event in store.events() {
                println!("{}", list_line(event));
            }
        }
    }
    Ok(())
}

/// Shows a single event, optionally opening its Discord link.
pub fn show(store: &EventStore, id: &str, open: bool, format: OutputFormat) -> ClientResult<()> {
    let event = store
        .get(id)
        .ok_or_else(|| ClientError::NotFound(id.to_string()))?;

    match format {
        OutputFormat::Json => println!("{}", to_json(event)?),
        OutputFormat::Tty => println!("{}", format_details(event)),
    }

    if open {
        actions::open_discord_url(event)?;
    }
    Ok(())
}

/// Changes the status of a stored event.
pub fn set_status(store: &mut EventStore, id: &str, status: EventStatus) -> ClientResult<()> {
    store.set_status(id, status)?;
    println!("{} is now {}.", id, status);
    Ok(())
}

/// Removes a stored event.
pub fn remove(store: &mut EventStore, id: &str) -> ClientResult<()> {
    let removed = store.remove(id)?;
    println!("Removed {} ({}).", id, removed.title);
    Ok(())
}

fn list_line(event: &Event) -> String {
    let when = match (event.date.is_empty(), event.time.is_empty()) {
        (false, false) => format!("{} {}", event.date, event.time),
        (false, true) => event.date.clone(),
        (true, _) => "(no date)".to_string(),
    };
    format!("{}  {}  {} [{}]", event.id, when, event.title, event.status.badge())
}
