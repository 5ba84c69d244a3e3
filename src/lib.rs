//! # ConnectWith
//!
//! A CLI for generating personalized connection requests from blog posts.
//!
//! The pipeline runs three sequential stages: extract the article text from
//! a URL, summarize the key insight with Gemini, then compose a short
//! connection-request message referencing that insight.

pub mod composer;
pub mod config;
pub mod extractor;
pub mod llm;
pub mod pipeline;
pub mod summarizer;

pub use composer::MessageType;
pub use config::Config;
pub use extractor::Extractor;
pub use llm::{CompletionClient, GeminiClient};
pub use pipeline::{PipelineOutput, Request};
