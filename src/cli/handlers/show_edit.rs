//! Show and edit command handlers.

use anyhow::{Context, Result};
use std::io::Read;

use super::resolve::require_note;
use super::{Manager, format_tags};
use crate::cli::output::{NoteDetail, NoteListing, Output, OutputFormat};
use crate::cli::{EditArgs, ShowArgs};

pub fn handle_show(args: &ShowArgs, manager: &mut Manager) -> Result<()> {
    let state = manager.state();
    let id = require_note(state, &args.note)?;
    let Some(note) = state.note(id) else {
        return Ok(());
    };

    match args.format {
        OutputFormat::Human => {
            println!("{}", note.title());
            println!(
                "Created: {}",
                note.date_created
                    .with_timezone(&chrono::Local)
                    .format("%b %-d, %Y at %-I:%M %p")
            );
            let tags = state.tags_for_note(id);
            if !tags.is_empty() {
                println!("Tags: {}", format_tags(&tags));
            }
            if let Some(summary) = &note.summary {
                println!("Summary: {}", summary);
            }
            println!();
            println!("{}", note.content);
        }
        OutputFormat::Json => {
            let detail = NoteDetail {
                listing: NoteListing::new(state, note),
                content: note.content.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(detail))?);
        }
    }
    Ok(())
}

pub fn handle_edit(args: &EditArgs, manager: &mut Manager) -> Result<()> {
    let id = require_note(manager.state(), &args.note)?;

    let content = match &args.content {
        Some(content) => content.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read content from stdin")?;
            buf
        }
    };

    manager.update_note(id, content);

    if let Some(note) = manager.note(id) {
        println!("Updated: {} [{}]", note.title(), id.prefix());
    }
    Ok(())
}
