//! The heuristic summary assembler.

use serde::Serialize;

use crate::highlights::select_highlights;
use crate::keywords::top_keywords;
use crate::patterns::{detect_decisions, detect_numbers_dates, detect_tasks};
use crate::sentences::split_sentences;
use crate::speakers::group_by_speakers;
use crate::topics::group_by_topics;

const GLOBAL_KEYWORD_COUNT: usize = 12;

/// Deterministic, rule-based summary of one transcript.
///
/// Topic and speaker groups are ordered (label, sentences) pairs in
/// first-seen order. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct SmartSummary {
    pub bullets: Vec<String>,
    pub topics: Vec<(String, Vec<String>)>,
    pub speakers: Vec<(String, Vec<String>)>,
    pub decisions: Vec<String>,
    pub tasks: Vec<String>,
    pub numbers_dates: Vec<String>,
    pub keywords: Vec<String>,
}

/// Run the full heuristic pipeline over a raw transcript.
///
/// Everything is rebuilt from the text on every call; an empty or blank
/// transcript produces a summary with every list empty.
pub fn build_smart_summary(full_text: &str) -> SmartSummary {
    let sentences = split_sentences(full_text);
    let keywords = top_keywords(&sentences, GLOBAL_KEYWORD_COUNT);

    SmartSummary {
        bullets: select_highlights(&sentences, &keywords),
        topics: group_by_topics(&sentences),
        // speaker labels live on raw lines, not joined sentences
        speakers: group_by_speakers(full_text),
        decisions: detect_decisions(&sentences),
        tasks: detect_tasks(&sentences),
        numbers_dates: detect_numbers_dates(&sentences),
        keywords,
    }
}
