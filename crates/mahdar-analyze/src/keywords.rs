//! Tokenizer, stopword filtering, and frequency-based keyword ranking.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Arabic stopwords (function words, pronouns, particles).
static AR_STOP: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "من", "إلى", "على", "عن", "في", "مع", "هذا", "هذه", "ذلك", "تلك", "هناك", "هنا",
        "هو", "هي", "هم", "هن", "أنا", "نحن", "انت", "أنت", "أنتِ", "أنتم", "أنتن",
        "كان", "كانت", "يكون", "تكون", "تم", "قد", "ثم", "لكن", "لأن", "إذا", "إن",
        "و", "أو", "كما", "أي", "أيضاً", "ايضا", "حتى", "كل", "بعض", "غير", "بدون",
        "بعد", "قبل", "بين", "ضمن", "حول", "عند", "مثل", "مثلاً", "مثلا",
    ]
    .into_iter()
    .collect()
});

/// English stopwords.
static EN_STOP: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "to", "of", "in", "on", "at", "for", "with", "and", "or", "is",
        "are", "was", "were", "be", "been", "it", "this", "that", "these", "those", "as",
        "by", "from",
    ]
    .into_iter()
    .collect()
});

/// Maximal runs of Latin or Arabic letters.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+|[اأإآء-ي]+").unwrap());

/// Extract lowercase content tokens: length > 2, not a stopword.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| t.chars().count() > 2)
        .filter(|t| !AR_STOP.contains(t) && !EN_STOP.contains(t))
        .map(String::from)
        .collect()
}

/// Top-k tokens by frequency across a sentence set.
///
/// Ties keep first-encountered order: counting walks the sentences in
/// order and the final sort is stable.
pub fn top_keywords(sentences: &[String], k: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for sentence in sentences {
        for token in tokenize(sentence) {
            match counts.get_mut(&token) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(token.clone(), 1);
                    order.push(token);
                }
            }
        }
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(k);
    order
}
