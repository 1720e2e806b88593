//! Text summarization through an external service.

mod http;

pub use http::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, HttpSummarizer, SummarizerSettings,
};

use async_trait::async_trait;
use thiserror::Error;

/// Text stored on a note when the service returns no results.
pub const NO_SUMMARY_PLACEHOLDER: &str = "Could not generate summary.";

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Errors from a summarization call. None of them are retried.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("no API token configured for the summarization service")]
    MissingToken,

    #[error("summarization request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("summarization service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected summarization response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("summarization task did not complete: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl SummarizeError {
    pub(crate) fn status(status: reqwest::StatusCode, body: &str) -> Self {
        let mut body: String = body
            .replace(['\n', '\r'], " ")
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        if body.is_empty() {
            body.push_str("<empty body>");
        }
        SummarizeError::Status { status, body }
    }
}

/// Successful summarization result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryText {
    /// First summary returned by the service.
    Generated(String),
    /// The service answered with an empty result list.
    Placeholder,
}

impl SummaryText {
    /// Returns the text to store on the note.
    pub fn into_text(self) -> String {
        match self {
            SummaryText::Generated(text) => text,
            SummaryText::Placeholder => NO_SUMMARY_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SummaryText::Placeholder)
    }
}

/// A service that shortens text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes non-empty `text`.
    async fn summarize(&self, text: &str) -> Result<SummaryText, SummarizeError>;
}
