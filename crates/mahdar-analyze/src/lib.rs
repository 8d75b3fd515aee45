//! Mahdar Analyze — deterministic, rule-based transcript analysis.
//!
//! Everything in this crate is a pure function over the transcript text:
//! no network, no caching, no shared mutable state. Running the pipeline
//! twice on the same input yields identical output.

pub mod glossary;
pub mod highlights;
pub mod keywords;
pub mod patterns;
pub mod sentences;
pub mod speakers;
pub mod summary;
pub mod topics;

pub use glossary::Glossary;
pub use sentences::split_sentences;
pub use summary::{build_smart_summary, SmartSummary};
