//! Free-text note with creation date, cached summary and tag membership.

use crate::domain::{NoteId, TagId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Title shown for notes without a usable first line.
pub const PLACEHOLDER_TITLE: &str = "New Note";

const PREVIEW_MAX_CHARS: usize = 100;

/// A user-authored text document.
///
/// Serialized with the field names used by `notes.json`:
/// `{id, content, dateCreated, summary?, tagIds[]}`.
///
/// # Examples
///
/// ```
/// use chrisnotes::domain::Note;
///
/// let mut note = Note::new();
/// assert_eq!(note.title(), "New Note");
///
/// note.content = "Hello\nworld".to_string();
/// assert_eq!(note.title(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub date_created: DateTime<Utc>,
    /// Written only by summarization; never cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tag_ids: BTreeSet<TagId>,
}

impl Note {
    /// Creates an empty note stamped with the current time.
    pub fn new() -> Self {
        Self::with_created(Utc::now())
    }

    /// Creates an empty note with a caller-provided creation time.
    pub fn with_created(date_created: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::new(),
            content: String::new(),
            date_created,
            summary: None,
            tag_ids: BTreeSet::new(),
        }
    }

    /// Returns the display title derived from the content.
    ///
    /// Zero-length lines are skipped; the first remaining line is trimmed of
    /// surrounding whitespace, Unicode spaces included. A whitespace-only first line, or no line at all,
    /// yields [`PLACEHOLDER_TITLE`].
    pub fn title(&self) -> &str {
        let first = self
            .content
            .split('\n')
            .find(|line| !line.is_empty())
            .map(str::trim)
            .unwrap_or_default();

        if first.is_empty() {
            PLACEHOLDER_TITLE
        } else {
            first
        }
    }

    /// Returns up to 100 characters of the text following the title line,
    /// with whitespace collapsed. `None` when there is no body.
    pub fn preview(&self) -> Option<String> {
        let mut lines = self.content.split('\n').filter(|line| !line.is_empty());
        lines.next()?;
        let body = lines
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ");
        if body.is_empty() {
            return None;
        }
        Some(body.chars().take(PREVIEW_MAX_CHARS).collect())
    }

    /// Returns true if the note carries `tag_id`.
    pub fn has_tag(&self, tag_id: &TagId) -> bool {
        self.tag_ids.contains(tag_id)
    }

    /// Flips membership of `tag_id`. Returns true if the tag is now attached.
    pub fn toggle_tag(&mut self, tag_id: TagId) -> bool {
        if self.tag_ids.remove(&tag_id) {
            false
        } else {
            self.tag_ids.insert(tag_id);
            true
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
