//! Persistence of notes, tags and the selected note.
//!
//! Loads never fail: a missing, unreadable or malformed file yields an empty
//! collection and a log line. Saves return errors for the caller to log.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::fs::{StoreError, ensure_dir, read_json, write_json};
use crate::domain::{Note, NoteId, Tag};

pub const NOTES_FILE: &str = "notes.json";
pub const TAGS_FILE: &str = "tags.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Settings key holding the last selected note id.
pub const SELECTED_NOTE_KEY: &str = "selected_note_id";

/// Load/save contract used by the notes manager.
pub trait Store {
    /// Loads all notes, or an empty list on any failure.
    fn load_notes(&self) -> Vec<Note>;

    /// Overwrites the stored notes.
    fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError>;

    /// Loads all tags in registry order, or an empty list on any failure.
    fn load_tags(&self) -> Vec<Tag>;

    /// Overwrites the stored tags.
    fn save_tags(&self, tags: &[Tag]) -> Result<(), StoreError>;

    /// Loads the last selected note id, if one was stored and is valid.
    fn load_selected(&self) -> Option<NoteId>;

    /// Stores the selected note id, or clears it.
    fn save_selected(&self, selected: Option<NoteId>) -> Result<(), StoreError>;
}

/// JSON-file store rooted at one data directory.
///
/// Layout:
/// - `notes.json` - array of notes
/// - `tags.json` - array of tags
/// - `settings.json` - small key/value object (`selected_note_id`)
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store at `root`, creating the directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CreateDir` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        ensure_dir(&root)?;
        tracing::debug!(root = %root.display(), "opened data directory");
        Ok(Self { root })
    }

    /// Returns the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILE)
    }

    pub fn tags_path(&self) -> PathBuf {
        self.root.join(TAGS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    fn load_list<T: serde::de::DeserializeOwned>(&self, path: &Path, what: &str) -> Vec<T> {
        match read_json::<Vec<T>>(path) {
            Ok(items) => {
                tracing::debug!(path = %path.display(), count = items.len(), "loaded {what}");
                items
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "no {what} file yet");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load {what}; starting empty");
                Vec::new()
            }
        }
    }

    fn load_settings(&self) -> BTreeMap<String, Value> {
        let path = self.settings_path();
        match read_json(&path) {
            Ok(settings) => settings,
            Err(e) if e.is_not_found() => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings; using defaults");
                BTreeMap::new()
            }
        }
    }
}

impl Store for JsonStore {
    fn load_notes(&self) -> Vec<Note> {
        self.load_list(&self.notes_path(), "notes")
    }

    fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        let path = self.notes_path();
        write_json(&path, notes)?;
        tracing::debug!(path = %path.display(), count = notes.len(), "saved notes");
        Ok(())
    }

    fn load_tags(&self) -> Vec<Tag> {
        self.load_list(&self.tags_path(), "tags")
    }

    fn save_tags(&self, tags: &[Tag]) -> Result<(), StoreError> {
        let path = self.tags_path();
        write_json(&path, tags)?;
        tracing::debug!(path = %path.display(), count = tags.len(), "saved tags");
        Ok(())
    }

    fn load_selected(&self) -> Option<NoteId> {
        let settings = self.load_settings();
        let raw = settings.get(SELECTED_NOTE_KEY)?.as_str()?;
        match raw.parse() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring invalid stored selection");
                None
            }
        }
    }

    fn save_selected(&self, selected: Option<NoteId>) -> Result<(), StoreError> {
        let mut settings = self.load_settings();
        let value = selected.map_or(Value::Null, |id| Value::String(id.to_string()));
        settings.insert(SELECTED_NOTE_KEY.to_string(), value);
        write_json(&self.settings_path(), &settings)
    }
}
