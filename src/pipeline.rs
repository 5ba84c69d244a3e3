//! The extract → summarize → compose pipeline.
//!
//! Stages run strictly in sequence; the first failing stage ends the run and
//! no partial output is produced.

use crate::composer::{self, ComposeError, MessageType};
use crate::extractor::{ExtractError, Extractor};
use crate::llm::CompletionClient;
use crate::summarizer::{self, SummarizeError};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("missing required input: {0}")]
    MissingInput(&'static str),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// One user request, validated on construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Request {
    url: String,
    author_name: String,
    message_type: MessageType,
}

impl Request {
    /// Build a request, rejecting blank inputs before any network work.
    pub fn new(
        url: impl Into<String>,
        author_name: impl Into<String>,
        message_type: MessageType,
    ) -> Result<Self, PipelineError> {
        let url = url.into();
        let author_name = author_name.into();

        if url.trim().is_empty() {
            return Err(PipelineError::MissingInput("url"));
        }
        if author_name.trim().is_empty() {
            return Err(PipelineError::MissingInput("author name"));
        }

        Ok(Self {
            url,
            author_name,
            message_type,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
}

/// Output of a fully successful pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The 1-2 line insight extracted from the article
    pub summary: String,
    /// The final connection-request message, within its character budget
    pub message: String,
}

/// Run the three stages in order, stopping at the first failure.
pub async fn run(
    request: &Request,
    extractor: &Extractor,
    client: &dyn CompletionClient,
) -> Result<PipelineOutput, PipelineError> {
    let content = extractor.extract(&request.url).await?;
    let summary = summarizer::summarize(client, &content).await?;
    let message = composer::compose(
        client,
        &request.author_name,
        &summary,
        request.message_type,
    )
    .await?;

    Ok(PipelineOutput { summary, message })
}

/// Write the generated message to `path`, byte-for-byte.
pub fn save_message(path: &Path, message: &str) -> std::io::Result<()> {
    std::fs::write(path, message)
}
