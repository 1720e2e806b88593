//! Tag command handlers (tags, tag add/rm/rename/color, toggle).

use anyhow::{Context, Result};

use super::Manager;
use super::resolve::{require_note, require_tag};
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::cli::{TagCommand, TagsArgs, ToggleArgs};
use crate::domain::TagColor;

pub fn handle_tags(args: &TagsArgs, manager: &mut Manager) -> Result<()> {
    let state = manager.state();
    let listings: Vec<TagListing> = state
        .tags
        .iter()
        .map(|t| TagListing::new(state, t))
        .collect();

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No tags found.");
            }
            for t in &listings {
                println!("{} ({}, {} notes) [{}]", t.name, t.color, t.count, &t.id[..10]);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

fn parse_color(raw: &str) -> TagColor {
    let color: TagColor = raw.parse().unwrap_or_default();
    if !color.is_known() {
        eprintln!(
            "warning: '{}' is not in the palette; it will display as {}",
            raw,
            TagColor::DEFAULT
        );
    }
    color
}

pub fn handle_tag(command: &TagCommand, manager: &mut Manager) -> Result<()> {
    match command {
        TagCommand::Add(args) => {
            let color = parse_color(&args.color);
            let id = manager
                .add_tag(&args.name, color)
                .with_context(|| format!("failed to add tag '{}'", args.name))?;
            if let Some(tag) = manager.tag(id) {
                println!("Added tag: {} ({}) [{}]", tag.name, tag.color, id.prefix());
            }
        }
        TagCommand::Remove(args) => {
            let id = require_tag(manager.state(), &args.tag)?;
            let name = manager.tag(id).map(|t| t.name.clone()).unwrap_or_default();
            manager.delete_tag(id);
            println!("Deleted tag: {}", name);
        }
        TagCommand::Rename(args) => {
            let id = require_tag(manager.state(), &args.tag)?;
            manager
                .rename_tag(id, &args.name)
                .with_context(|| format!("failed to rename tag '{}'", args.tag))?;
            if let Some(tag) = manager.tag(id) {
                println!("Renamed tag: {}", tag.name);
            }
        }
        TagCommand::Color(args) => {
            let id = require_tag(manager.state(), &args.tag)?;
            manager.set_tag_color(id, parse_color(&args.color));
            if let Some(tag) = manager.tag(id) {
                println!("Recolored tag: {} ({})", tag.name, tag.color);
            }
        }
    }
    Ok(())
}

pub fn handle_toggle(args: &ToggleArgs, manager: &mut Manager) -> Result<()> {
    let note_id = require_note(manager.state(), &args.note)?;
    let tag_id = require_tag(manager.state(), &args.tag)?;

    manager.toggle_tag_for_note(tag_id, note_id);

    let (Some(note), Some(tag)) = (manager.note(note_id), manager.tag(tag_id)) else {
        return Ok(());
    };
    if note.has_tag(&tag_id) {
        println!("Tagged '{}' with {}", note.title(), tag.name);
    } else {
        println!("Removed {} from '{}'", tag.name, note.title());
    }
    Ok(())
}
