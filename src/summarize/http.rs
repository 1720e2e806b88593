//! Hugging Face inference API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{SummarizeError, Summarizer, SummaryText};

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
pub const DEFAULT_MAX_LENGTH: u32 = 130;
pub const DEFAULT_MIN_LENGTH: u32 = 30;

/// Connection and generation settings for [`HttpSummarizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerSettings {
    pub endpoint: String,
    pub api_token: Option<String>,
    pub max_length: u32,
    pub min_length: u32,
    /// `None` keeps the transport default (no request timeout).
    pub timeout: Option<Duration>,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            timeout: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
    parameters: SummarizeParameters,
}

#[derive(Debug, Serialize)]
struct SummarizeParameters {
    max_length: u32,
    min_length: u32,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

/// Summarizer that POSTs to a Hugging Face style inference endpoint.
pub struct HttpSummarizer {
    settings: SummarizerSettings,
    client: reqwest::Client,
}

impl HttpSummarizer {
    /// Builds a client for the given settings.
    ///
    /// # Errors
    ///
    /// Returns `SummarizeError::Transport` if the HTTP client cannot be built.
    pub fn new(settings: SummarizerSettings) -> Result<Self, SummarizeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            settings,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, text: &str) -> Result<SummaryText, SummarizeError> {
        let token = self
            .settings
            .api_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(SummarizeError::MissingToken)?;

        let request = SummarizeRequest {
            inputs: text,
            parameters: SummarizeParameters {
                max_length: self.settings.max_length,
                min_length: self.settings.min_length,
            },
        };

        tracing::debug!(
            endpoint = %self.settings.endpoint,
            chars = text.chars().count(),
            "sending summarization request"
        );

        let resp = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            return Err(SummarizeError::status(
                status,
                &String::from_utf8_lossy(&body),
            ));
        }

        let items: Vec<SummaryItem> = serde_json::from_slice(&body)?;
        tracing::debug!(results = items.len(), "summarization response decoded");

        Ok(items
            .into_iter()
            .next()
            .map_or(SummaryText::Placeholder, |item| {
                SummaryText::Generated(item.summary_text)
            }))
    }
}
