//! List command handler.

use anyhow::Result;

use super::resolve::require_tag;
use super::{Manager, format_tags, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};

const TITLE_WIDTH: usize = 40;

pub fn handle_list(args: &ListArgs, manager: &mut Manager) -> Result<()> {
    // Build the filter through the manager so it goes through the same path a UI would.
    for name in &args.tags {
        let tag_id = require_tag(manager.state(), name)?;
        if !manager.state().selected_tags.contains(&tag_id) {
            manager.toggle_filter_tag(tag_id);
        }
    }

    let state = manager.state();
    let notes = state.filtered_notes();

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }
            for note in notes {
                let marker = if state.selected_note == Some(note.id) {
                    '*'
                } else {
                    ' '
                };
                let title = truncate_str(note.title(), TITLE_WIDTH);
                let tags = format_tags(&state.tags_for_note(note.id));
                println!(
                    "{} {}  {:<width$}  {}",
                    marker,
                    note.id.prefix(),
                    title,
                    tags,
                    width = TITLE_WIDTH
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .map(|note| NoteListing::new(state, note))
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}
