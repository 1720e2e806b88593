//! Summarization jobs detached from the notes manager.
//!
//! A job owns a snapshot of the note text, so the manager stays free for
//! other edits while the request is in flight.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::domain::NoteId;
use crate::summarize::{SummarizeError, Summarizer, SummaryText};

/// Why a summarization request was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummaryRejected {
    #[error("no note is selected")]
    NoSelection,
    #[error("the selected note is empty")]
    EmptyContent,
    #[error("a summarization is already in progress")]
    Busy,
}

/// Result of a finished job, to be merged back with `finish_summary`.
#[derive(Debug)]
pub struct SummaryOutcome {
    pub note_id: NoteId,
    pub result: Result<SummaryText, SummarizeError>,
}

/// A summarization that has been admitted by the in-flight guard.
pub struct SummaryJob {
    note_id: NoteId,
    content: String,
    summarizer: Arc<dyn Summarizer>,
}

impl SummaryJob {
    pub(crate) fn new(note_id: NoteId, content: String, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            note_id,
            content,
            summarizer,
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// Calls the service and returns the outcome.
    pub async fn run(self) -> SummaryOutcome {
        let result = self.summarizer.summarize(&self.content).await;
        SummaryOutcome {
            note_id: self.note_id,
            result,
        }
    }

    /// Runs the job on the tokio runtime and returns its handle.
    pub fn spawn(self) -> SummaryTask {
        let note_id = self.note_id;
        SummaryTask {
            note_id,
            handle: tokio::spawn(self.run()),
        }
    }
}

/// Handle to a spawned job. Not cancelled on drop; the task runs to completion.
pub struct SummaryTask {
    note_id: NoteId,
    handle: JoinHandle<SummaryOutcome>,
}

impl SummaryTask {
    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the job. A panicked task becomes a failed outcome.
    pub async fn join(self) -> SummaryOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => SummaryOutcome {
                note_id: self.note_id,
                result: Err(SummarizeError::TaskFailed(e)),
            },
        }
    }
}
