//! Mahdar Summarize — LLM-backed structured meeting summarization.
//!
//! The orchestrator chunks long transcripts, prompts a local inference
//! endpoint (chat protocol with a completion-protocol fallback), parses
//! possibly malformed JSON responses, and degrades to an extractive
//! summary when no structured result can be recovered. Transport failures
//! propagate; parse failures never do.

pub mod chunk;
pub mod client;
pub mod fallback;
pub mod format;
pub mod parse;
pub mod prompt;
pub mod summarizer;
pub mod types;

pub use client::EndpointClient;
pub use format::format_summary;
pub use summarizer::{HeuristicSummarizer, OllamaSummarizer, Summarizer};
pub use types::StructuredSummary;
