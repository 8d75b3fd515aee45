//! Highlight selection: scored, stable-sorted, prefix-deduplicated bullets.

use crate::patterns::{is_decision, is_task};

const KEYWORD_HIT_SCORE: i64 = 2;
const DECISION_SCORE: i64 = 3;
const TASK_SCORE: i64 = 2;
/// Soft length penalty: one point per full 180 characters. Tunable.
const LONG_SENTENCE_PENALTY_DIV: usize = 180;

const MAX_BULLETS: usize = 10;
const DEDUP_PREFIX_CHARS: usize = 60;

/// Score a sentence against the top global keywords.
fn score(sentence: &str, keywords: &[String]) -> i64 {
    let lower = sentence.to_lowercase();
    let mut score = 0i64;
    for kw in keywords.iter().take(8) {
        if lower.contains(kw.as_str()) {
            score += KEYWORD_HIT_SCORE;
        }
    }
    if is_decision(sentence) {
        score += DECISION_SCORE;
    }
    if is_task(sentence) {
        score += TASK_SCORE;
    }
    score - (sentence.chars().count() / LONG_SENTENCE_PENALTY_DIV) as i64
}

/// Pick up to 10 bullet sentences, best score first.
///
/// The sort is stable, so equally scored sentences keep transcript order.
/// Near-duplicates are dropped by comparing the first 60 characters.
pub fn select_highlights(sentences: &[String], keywords: &[String]) -> Vec<String> {
    let mut scored: Vec<(i64, &String)> =
        sentences.iter().map(|s| (score(s, keywords), s)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut bullets = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for (_, sentence) in scored.into_iter().take(MAX_BULLETS) {
        let key: String = sentence.chars().take(DEDUP_PREFIX_CHARS).collect();
        if !seen.contains(&key) {
            seen.push(key);
            bullets.push(sentence.clone());
        }
    }
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sents(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decision_sentence_ranks_first() {
        let s = sents(&["weather was nice", "we decided to migrate the server"]);
        let kw = vec!["server".to_string()];
        let bullets = select_highlights(&s, &kw);
        assert_eq!(bullets[0], "we decided to migrate the server");
    }

    #[test]
    fn test_cap_at_ten() {
        let many: Vec<String> = (0..25).map(|i| format!("unique sentence number {i}")).collect();
        let bullets = select_highlights(&many, &[]);
        assert_eq!(bullets.len(), 10);
    }

    #[test]
    fn test_stable_order_on_ties() {
        let s = sents(&["first flat line", "second flat line", "third flat line"]);
        let bullets = select_highlights(&s, &[]);
        assert_eq!(bullets[0], "first flat line");
        assert_eq!(bullets[1], "second flat line");
    }

    #[test]
    fn test_long_sentences_penalized() {
        let long = "x".repeat(400);
        let s = vec![long.clone(), "short one".to_string()];
        let bullets = select_highlights(&s, &[]);
        assert_eq!(bullets[0], "short one");
    }

    #[test]
    fn test_prefix_dedup() {
        let base = "a".repeat(70);
        let s = vec![format!("{base} tail one"), format!("{base} tail two")];
        let bullets = select_highlights(&s, &[]);
        assert_eq!(bullets.len(), 1);
    }
}
