//! Extractive fallback when no structured result can be parsed.

const FALLBACK_SENTENCES: usize = 5;
const FALLBACK_MAX_CHARS: usize = 1200;

/// First few sentences of the input, joined and length-capped.
///
/// Splits after a terminator (`.`, `!`, `?`, `؟`) followed by whitespace,
/// keeping the terminator with its sentence.
pub fn extractive_summary(text: &str) -> String {
    let text = text.trim();
    let mut sentences: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut prev_terminator = false;

    for (i, c) in text.char_indices() {
        if prev_terminator && c.is_whitespace() {
            let s = text[start..i].trim();
            if !s.is_empty() {
                sentences.push(s);
            }
            start = i;
            if sentences.len() == FALLBACK_SENTENCES {
                break;
            }
        }
        prev_terminator = matches!(c, '.' | '!' | '?' | '؟');
    }
    if sentences.len() < FALLBACK_SENTENCES {
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
    }

    sentences
        .join(" ")
        .chars()
        .take(FALLBACK_MAX_CHARS)
        .collect()
}
