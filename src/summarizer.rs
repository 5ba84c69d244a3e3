//! Insight summarization.

use crate::llm::{CompletionClient, CompletionError};
use thiserror::Error;

/// System instruction for the summary completion
const SUMMARY_SYSTEM: &str = "You are a helpful assistant that summarizes technical blog posts. \
Extract the main insight or learning that would be valuable for a developer. \
Keep it to 1-2 lines maximum.";

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("error generating summary: {0}")]
    Completion(#[from] CompletionError),
}

/// Summarize article text into a 1-2 line developer-relevant insight.
///
/// The full article text is sent through unbounded; no length limit is
/// applied before the completion call.
pub async fn summarize(
    client: &dyn CompletionClient,
    content: &str,
) -> Result<String, SummarizeError> {
    let user = format!("Here's the blog content to summarize:\n\n{content}");
    let summary = client.complete(SUMMARY_SYSTEM, &user).await?;
    Ok(summary.trim().to_string())
}
