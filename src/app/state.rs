//! Observable application state.

use std::collections::BTreeSet;

use crate::domain::{Note, NoteId, Tag, TagId, filter_notes};

/// Snapshot of everything a front-end renders.
///
/// The notes manager owns the live copy and publishes a clone after every
/// change; subscribers never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Notes in creation order.
    pub notes: Vec<Note>,
    /// Tags in registry (display) order.
    pub tags: Vec<Tag>,
    /// Zero or one selected note.
    pub selected_note: Option<NoteId>,
    /// Active tag filter; empty means "show everything".
    pub selected_tags: BTreeSet<TagId>,
    /// True while a summarization call is in flight.
    pub is_summarizing: bool,
}

impl AppState {
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn tag(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Returns the selected note, if it still exists.
    pub fn selected(&self) -> Option<&Note> {
        self.selected_note.and_then(|id| self.note(id))
    }

    /// Notes visible under the active tag filter.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.selected_tags)
    }

    /// Tags attached to `note_id`, in registry order.
    pub fn tags_for_note(&self, note_id: NoteId) -> Vec<&Tag> {
        match self.note(note_id) {
            Some(note) => self.tags.iter().filter(|t| note.has_tag(&t.id)).collect(),
            None => Vec::new(),
        }
    }

    /// Whether the summarize control should be enabled.
    pub fn can_summarize(&self) -> bool {
        !self.is_summarizing && self.selected().is_some_and(|n| !n.content.is_empty())
    }

    pub(crate) fn note_index(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}
