//! Connection-message composition.

use crate::llm::{CompletionClient, CompletionError};
use clap::ValueEnum;
use thiserror::Error;

/// Marker appended when a generated message is cut down to its budget
const ELLIPSIS: &str = "...";

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("error generating message: {0}")]
    Completion(#[from] CompletionError),
}

/// Message length option, selecting the character budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageType {
    /// At most 200 characters
    Short,
    /// At most 300 characters
    Standard,
}

impl MessageType {
    /// Maximum number of characters allowed in the generated message
    pub fn max_chars(self) -> usize {
        match self {
            MessageType::Short => 200,
            MessageType::Standard => 300,
        }
    }
}

/// Compose a personalized connection request referencing the summary.
///
/// The character budget goes into the system instruction, and the result is
/// cut down locally as a safety net in case the model overruns it.
pub async fn compose(
    client: &dyn CompletionClient,
    author_name: &str,
    summary: &str,
    message_type: MessageType,
) -> Result<String, ComposeError> {
    let max_chars = message_type.max_chars();
    let system = format!(
        "You are a professional networking assistant. \
         Generate a personalized LinkedIn connection request message. \
         Keep it under {max_chars} characters. \
         Use this template but make it natural:\n\
         'Hi [Author], I recently read your blog and found it insightful. \
         I learned [summary] and I'm planning to use it in [my projects]. \
         Would love to connect!'"
    );
    let user = format!("Author name: {author_name}\nSummary: {summary}");

    let message = client.complete(&system, &user).await?;
    Ok(enforce_budget(message.trim(), max_chars))
}

/// Cut `message` down to `max_chars` characters, marking the cut with an
/// ellipsis. The cut is a plain character cut and can land mid-word.
fn enforce_budget(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message.to_string();
    }

    let mut truncated: String = message.chars().take(max_chars - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budgets_per_message_type() {
        assert_eq!(MessageType::Short.max_chars(), 200);
        assert_eq!(MessageType::Standard.max_chars(), 300);
    }

    #[test]
    fn within_budget_is_returned_untouched() {
        let message = "Hi Jane, would love to connect!";
        assert_eq!(enforce_budget(message, 200), message);
    }

    #[test]
    fn exactly_at_budget_is_not_truncated() {
        let message = "x".repeat(200);
        assert_eq!(enforce_budget(&message, 200), message);
    }

    #[test]
    fn over_budget_is_cut_to_exactly_the_budget() {
        let message = "m".repeat(250);
        let result = enforce_budget(&message, 200);
        assert_eq!(result.chars().count(), 200);
        assert!(result.ends_with(ELLIPSIS));
        assert_eq!(result, format!("{}...", "m".repeat(197)));
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        let message: String = std::iter::repeat('é').take(250).collect();
        let result = enforce_budget(&message, 200);
        assert_eq!(result.chars().count(), 200);
        assert!(result.ends_with(ELLIPSIS));
    }
}
