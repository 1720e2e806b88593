//! Note lifecycle handlers (new, rm, select).

use anyhow::Result;

use super::Manager;
use super::resolve::require_note;
use crate::cli::{NewArgs, RemoveArgs, SelectArgs};

pub fn handle_new(args: &NewArgs, manager: &mut Manager) -> Result<()> {
    let id = manager.add_note();
    if let Some(content) = &args.content {
        manager.update_note(id, content.as_str());
    }

    let title = manager.note(id).map(|n| n.title()).unwrap_or_default();
    println!("Created: {} [{}]", title, id.prefix());
    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, manager: &mut Manager) -> Result<()> {
    let id = require_note(manager.state(), &args.note)?;
    let title = manager
        .note(id)
        .map(|n| n.title().to_string())
        .unwrap_or_default();

    manager.delete_note(id);

    println!("Deleted: {} [{}]", title, id.prefix());
    match manager.selected_note() {
        Some(next) => println!("Selected: {} [{}]", next.title(), next.id.prefix()),
        None => println!("No note selected."),
    }
    Ok(())
}

pub fn handle_select(args: &SelectArgs, manager: &mut Manager) -> Result<()> {
    let id = require_note(manager.state(), &args.note)?;
    manager.select_note(Some(id));
    if let Some(note) = manager.selected_note() {
        println!("Selected: {} [{}]", note.title(), note.id.prefix());
    }
    Ok(())
}
