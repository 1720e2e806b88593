//! Notes manager: the single owner of notes, tags, selection and filter.
//!
//! # Invariants
//! - Every mutation persists before it publishes a new [`AppState`].
//! - After `delete_tag` returns, no note and no filter entry refers to the tag.
//! - At most one summarization is admitted at a time.
//! - Unknown note/tag ids are silent no-ops.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use super::state::AppState;
use super::summary::{SummaryJob, SummaryOutcome, SummaryRejected};
use crate::domain::{Note, NoteId, ParseTagError, Tag, TagColor, TagId};
use crate::infra::Store;
use crate::summarize::Summarizer;

/// Errors surfaced to callers of the notes manager.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid tag: {0}")]
    InvalidTag(#[from] ParseTagError),
}

/// Application facade bound by front-ends.
pub struct NotesManager<S: Store> {
    store: S,
    summarizer: Arc<dyn Summarizer>,
    state: AppState,
    state_tx: watch::Sender<AppState>,
}

impl<S: Store> NotesManager<S> {
    /// Loads tags, notes and the last selection from `store`.
    ///
    /// A stored selection is restored only if that note still exists. Tag ids
    /// on notes that are missing from the registry are dropped.
    pub fn load(store: S, summarizer: Arc<dyn Summarizer>) -> Self {
        let tags = store.load_tags();
        let mut notes = store.load_notes();

        let mut dangling = 0;
        for note in &mut notes {
            let before = note.tag_ids.len();
            note.tag_ids.retain(|id| tags.iter().any(|t| t.id == *id));
            dangling += before - note.tag_ids.len();
        }
        if dangling > 0 {
            tracing::warn!(dangling, "dropped tag references missing from the registry");
        }

        let selected_note = store
            .load_selected()
            .filter(|id| notes.iter().any(|n| n.id == *id));

        tracing::info!(
            notes = notes.len(),
            tags = tags.len(),
            restored_selection = selected_note.is_some(),
            "notes manager loaded"
        );

        let state = AppState {
            notes,
            tags,
            selected_note,
            ..AppState::default()
        };
        let (state_tx, _) = watch::channel(state.clone());

        Self {
            store,
            summarizer,
            state,
            state_tx,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Subscribes to state snapshots published after every change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_tx.subscribe()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notes(&self) -> &[Note] {
        &self.state.notes
    }

    pub fn tags(&self) -> &[Tag] {
        &self.state.tags
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.state.note(id)
    }

    pub fn tag(&self, id: TagId) -> Option<&Tag> {
        self.state.tag(id)
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.state.selected()
    }

    pub fn filtered_notes(&self) -> Vec<&Note> {
        self.state.filtered_notes()
    }

    /// Tags attached to a note, in registry order.
    pub fn tags_for_note(&self, note_id: NoteId) -> Vec<&Tag> {
        self.state.tags_for_note(note_id)
    }

    pub fn is_summarizing(&self) -> bool {
        self.state.is_summarizing
    }

    // ===========================================
    // Tags
    // ===========================================

    /// Appends a new tag and persists the registry.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidTag` if the name is empty.
    pub fn add_tag(&mut self, name: &str, color: TagColor) -> Result<TagId, AppError> {
        let tag = Tag::new(name, color)?;
        let id = tag.id;
        tracing::info!(tag_id = %id, color = %tag.color, "adding tag");
        self.state.tags.push(tag);
        self.persist_tags();
        self.publish();
        Ok(id)
    }

    /// Removes a tag, first detaching it from every note and the filter.
    pub fn delete_tag(&mut self, tag_id: TagId) {
        let mut detached = 0usize;
        for note in &mut self.state.notes {
            if note.tag_ids.remove(&tag_id) {
                detached += 1;
            }
        }
        self.persist_notes();

        let before = self.state.tags.len();
        self.state.tags.retain(|t| t.id != tag_id);
        if self.state.tags.len() == before {
            tracing::debug!(tag_id = %tag_id, "delete_tag: unknown tag");
        } else {
            tracing::info!(tag_id = %tag_id, detached, "deleted tag");
        }
        self.persist_tags();

        self.state.selected_tags.remove(&tag_id);
        self.publish();
    }

    /// Renames a tag. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidTag` if the name is empty.
    pub fn rename_tag(&mut self, tag_id: TagId, name: &str) -> Result<(), AppError> {
        let Some(tag) = self.state.tags.iter_mut().find(|t| t.id == tag_id) else {
            return Ok(());
        };
        tag.rename(name)?;
        self.persist_tags();
        self.publish();
        Ok(())
    }

    /// Changes a tag's color. Unknown ids are ignored.
    pub fn set_tag_color(&mut self, tag_id: TagId, color: TagColor) {
        let Some(tag) = self.state.tags.iter_mut().find(|t| t.id == tag_id) else {
            return;
        };
        tag.color = color;
        self.persist_tags();
        self.publish();
    }

    // ===========================================
    // Notes
    // ===========================================

    /// Appends an empty note, selects it and persists.
    pub fn add_note(&mut self) -> NoteId {
        let note = Note::new();
        let id = note.id;
        self.state.notes.push(note);
        self.state.selected_note = Some(id);
        tracing::info!(note_id = %id, "added note");
        self.persist_notes();
        self.publish();
        id
    }

    /// Replaces a note's content and selects it. Unknown ids are ignored.
    pub fn update_note(&mut self, note_id: NoteId, content: impl Into<String>) {
        let Some(index) = self.state.note_index(note_id) else {
            tracing::debug!(note_id = %note_id, "update_note: unknown note");
            return;
        };
        self.state.notes[index].content = content.into();
        self.state.selected_note = Some(note_id);
        self.persist_notes();
        self.publish();
    }

    /// Removes a note. If it was selected, the first remaining note (or none)
    /// becomes selected.
    pub fn delete_note(&mut self, note_id: NoteId) {
        let Some(index) = self.state.note_index(note_id) else {
            tracing::debug!(note_id = %note_id, "delete_note: unknown note");
            return;
        };
        self.state.notes.remove(index);
        if self.state.selected_note == Some(note_id) {
            self.state.selected_note = self.state.notes.first().map(|n| n.id);
        }
        tracing::info!(note_id = %note_id, "deleted note");
        self.persist_notes();
        self.publish();
    }

    /// Flips membership of `tag_id` on a note. Unknown notes and tags are ignored.
    pub fn toggle_tag_for_note(&mut self, tag_id: TagId, note_id: NoteId) {
        if self.state.tag(tag_id).is_none() {
            tracing::debug!(tag_id = %tag_id, "toggle_tag_for_note: unknown tag");
            return;
        }
        let Some(index) = self.state.note_index(note_id) else {
            tracing::debug!(note_id = %note_id, "toggle_tag_for_note: unknown note");
            return;
        };
        let attached = self.state.notes[index].toggle_tag(tag_id);
        tracing::debug!(note_id = %note_id, tag_id = %tag_id, attached, "toggled tag");
        self.persist_notes();
        self.publish();
    }

    // ===========================================
    // Selection and filter
    // ===========================================

    /// Selects a note, or clears the selection with `None`.
    /// Selecting an unknown id is ignored.
    pub fn select_note(&mut self, note_id: Option<NoteId>) {
        if let Some(id) = note_id {
            if self.state.note_index(id).is_none() {
                tracing::debug!(note_id = %id, "select_note: unknown note");
                return;
            }
        }
        self.state.selected_note = note_id;
        if let Err(e) = self.store.save_selected(note_id) {
            tracing::warn!(error = %e, "failed to save selection");
        }
        self.publish();
    }

    /// Adds or removes a tag from the active filter. Unknown tags are ignored.
    pub fn toggle_filter_tag(&mut self, tag_id: TagId) {
        if self.state.tag(tag_id).is_none() {
            return;
        }
        if !self.state.selected_tags.remove(&tag_id) {
            self.state.selected_tags.insert(tag_id);
        }
        self.publish();
    }

    pub fn clear_filter(&mut self) {
        if self.state.selected_tags.is_empty() {
            return;
        }
        self.state.selected_tags.clear();
        self.publish();
    }

    // ===========================================
    // Summarization
    // ===========================================

    /// Admits a summarization of the selected note.
    ///
    /// Sets the busy flag; the caller must hand the job's outcome to
    /// [`finish_summary`](Self::finish_summary), or call
    /// [`abandon_summary`](Self::abandon_summary) if the job is dropped.
    pub fn begin_summary(&mut self) -> Result<SummaryJob, SummaryRejected> {
        if self.state.is_summarizing {
            return Err(SummaryRejected::Busy);
        }
        let note = self.state.selected().ok_or(SummaryRejected::NoSelection)?;
        if note.content.is_empty() {
            return Err(SummaryRejected::EmptyContent);
        }

        let job = SummaryJob::new(note.id, note.content.clone(), Arc::clone(&self.summarizer));
        self.state.is_summarizing = true;
        tracing::info!(note_id = %job.note_id(), "summarization started");
        self.publish();
        Ok(job)
    }

    /// Merges a finished job and clears the busy flag.
    ///
    /// Returns true if a summary was stored. Failures are logged and leave the
    /// note untouched; a note deleted meanwhile is skipped.
    pub fn finish_summary(&mut self, outcome: SummaryOutcome) -> bool {
        self.state.is_summarizing = false;

        let stored = match outcome.result {
            Ok(summary) => match self.state.note_index(outcome.note_id) {
                Some(index) => {
                    if summary.is_placeholder() {
                        tracing::info!(note_id = %outcome.note_id, "service returned no summary");
                    }
                    self.state.notes[index].summary = Some(summary.into_text());
                    self.persist_notes();
                    true
                }
                None => {
                    tracing::debug!(note_id = %outcome.note_id, "note gone before summary arrived");
                    false
                }
            },
            Err(e) => {
                tracing::warn!(note_id = %outcome.note_id, error = %e, "summarization failed");
                false
            }
        };

        self.publish();
        stored
    }

    /// Clears the busy flag for a job that will never be finished.
    ///
    /// Returns false if no summarization was in flight.
    pub fn abandon_summary(&mut self) -> bool {
        if !self.state.is_summarizing {
            return false;
        }
        self.state.is_summarizing = false;
        tracing::info!("summarization abandoned");
        self.publish();
        true
    }

    /// Summarizes the selected note in place.
    ///
    /// Holds the manager for the whole call; front-ends that keep editing
    /// meanwhile should use `begin_summary` + `SummaryJob::spawn` instead.
    /// Dropping the returned future releases the busy flag.
    pub async fn summarize_selected(&mut self) -> Result<bool, SummaryRejected> {
        let job = self.begin_summary().inspect_err(|reason| {
            tracing::debug!(%reason, "summarization not started");
        })?;
        let guard = InFlight { manager: self };
        let outcome = job.run().await;
        Ok(guard.manager.finish_summary(outcome))
    }

    // ===========================================
    // Persistence and publishing
    // ===========================================

    fn persist_notes(&self) {
        if let Err(e) = self.store.save_notes(&self.state.notes) {
            tracing::warn!(error = %e, "failed to save notes");
        }
        if let Err(e) = self.store.save_selected(self.state.selected_note) {
            tracing::warn!(error = %e, "failed to save selection");
        }
    }

    fn persist_tags(&self) {
        if let Err(e) = self.store.save_tags(&self.state.tags) {
            tracing::warn!(error = %e, "failed to save tags");
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }
}

/// Releases the busy flag if a summarization is dropped before it finishes.
struct InFlight<'a, S: Store> {
    manager: &'a mut NotesManager<S>,
}

impl<S: Store> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.manager.abandon_summary();
    }
}
