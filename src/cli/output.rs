//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::app::AppState;
use crate::domain::{Note, Tag};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub title: String,
    pub created: String,
    pub tags: Vec<String>,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl NoteListing {
    pub fn new(state: &AppState, note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title().to_string(),
            created: note.date_created.to_rfc3339(),
            tags: state
                .tags_for_note(note.id)
                .iter()
                .map(|t| t.name.clone())
                .collect(),
            selected: state.selected_note == Some(note.id),
            preview: note.preview(),
            summary: note.summary.clone(),
        }
    }
}

/// Full note detail for `show`.
#[derive(Debug, Serialize)]
pub struct NoteDetail {
    #[serde(flatten)]
    pub listing: NoteListing,
    pub content: String,
}

/// A tag with its color and usage count.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub id: String,
    pub name: String,
    pub color: String,
    pub hex: String,
    pub count: usize,
}

impl TagListing {
    pub fn new(state: &AppState, tag: &Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name.clone(),
            color: tag.color.to_string(),
            hex: tag.display_color().hex(),
            count: state.notes.iter().filter(|n| n.has_tag(&tag.id)).count(),
        }
    }
}
