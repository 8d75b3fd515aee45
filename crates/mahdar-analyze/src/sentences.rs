//! Sentence splitting for mixed Arabic/English transcripts.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Sentence terminators: Latin `.!?`, Arabic `؟`, and raw newlines.
static TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?؟\n]+").unwrap());

/// Split raw transcript text into trimmed, non-empty sentences.
///
/// Whitespace runs are collapsed to single spaces first, so the split
/// sees one flat line. Empty input yields an empty vec.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = WHITESPACE_RUN.replace_all(text.trim(), " ");
    if text.is_empty() {
        return Vec::new();
    }
    TERMINATORS
        .split(&text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
