//! Isolated test environment with a temporary data directory.

#![allow(dead_code)]

use super::NotesCommand;
use chrisnotes::domain::{Note, NoteId, Tag, TagColor};
use chrisnotes::infra::{JsonStore, Store};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a note seeded directly into the store.
#[derive(Debug, Default)]
pub struct TestNote {
    content: String,
    tags: Vec<String>,
    summary: Option<String>,
}

impl TestNote {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attaches a tag by name, creating it in blue if it does not exist.
    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.tags.push(name.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Isolated environment: one temp dir holding the data dir and a config file.
///
/// Cleaned up on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("ChrisNotes");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_path,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> JsonStore {
        JsonStore::open(&self.data_dir).expect("Failed to open store")
    }

    /// Writes the config file; commands from [`cmd`](Self::cmd) pick it up.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Seeds a tag and returns it.
    pub fn add_tag(&self, name: &str, color: TagColor) -> Tag {
        let store = self.store();
        let mut tags = store.load_tags();
        let tag = Tag::new(name, color).expect("Invalid tag name");
        tags.push(tag.clone());
        store.save_tags(&tags).expect("Failed to save tags");
        tag
    }

    /// Seeds a note and returns its id. Does not change the selection.
    pub fn add_note(&self, test_note: &TestNote) -> NoteId {
        let store = self.store();
        let mut note = Note::new();
        note.content = test_note.content.clone();
        note.summary = test_note.summary.clone();

        for name in &test_note.tags {
            let existing = store.load_tags().into_iter().find(|t| &t.name == name);
            let tag = existing.unwrap_or_else(|| self.add_tag(name, TagColor::Blue));
            note.tag_ids.insert(tag.id);
        }

        let mut notes = store.load_notes();
        notes.push(note.clone());
        store.save_notes(&notes).expect("Failed to save notes");
        note.id
    }

    pub fn notes(&self) -> Vec<Note> {
        self.store().load_notes()
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.store().load_tags()
    }

    pub fn selected(&self) -> Option<NoteId> {
        self.store().load_selected()
    }

    /// Creates a command configured for this environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .data_dir(&self.data_dir)
            .config(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.store();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seeds_notes_with_tags() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("One").tag("work"));
        env.add_note(&TestNote::new("Two").tag("work").tag("home"));

        assert_eq!(env.notes().len(), 2);
        let names: Vec<String> = env.tags().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["work", "home"]);
    }
}
