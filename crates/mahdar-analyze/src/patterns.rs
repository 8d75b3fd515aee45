//! Keyword- and pattern-based sentence classifiers: decisions, tasks,
//! numbers/dates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bilingual decision phrases.
pub const DECISION_KWS: &[&str] = &[
    "تم الاتفاق", "اتفقنا", "تم اعتماد", "قررنا", "تم القرار", "قرار", "اعتماد",
    "approve", "approved", "we decided", "decision", "agreed",
];

/// Bilingual task/action phrases.
pub const TASK_KWS: &[&str] = &[
    "مطلوب", "لازم", "يرجى", "يرجى من", "تكليف", "مسؤول", "على", "رح", "سوف", "سنقوم",
    "todo", "to do", "action", "task", "need to", "please",
];

/// Date (`12/03/2024`), 12-hour time (`3 pm`), or any numeric literal.
static NUM_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,4}[/\-.:]\d{1,2}[/\-.:]\d{1,4})|(\d{1,2}\s*(?:am|pm))|(\d+(?:\.\d+)?)")
        .unwrap()
});

const MAX_DECISIONS: usize = 12;
const MAX_TASKS: usize = 15;
const MAX_NUMBERS_DATES: usize = 12;

/// Case-insensitive containment against a phrase table.
fn contains_any(sentence: &str, phrases: &[&str]) -> bool {
    let lower = sentence.to_lowercase();
    phrases.iter().any(|p| lower.contains(&p.to_lowercase()))
}

pub fn is_decision(sentence: &str) -> bool {
    contains_any(sentence, DECISION_KWS)
}

pub fn is_task(sentence: &str) -> bool {
    contains_any(sentence, TASK_KWS)
}

/// Sentences containing a decision phrase, transcript order, capped at 12.
pub fn detect_decisions(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| is_decision(s))
        .map(|s| s.trim().to_string())
        .take(MAX_DECISIONS)
        .collect()
}

/// Sentences containing a task phrase, transcript order, capped at 15.
pub fn detect_tasks(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| is_task(s))
        .map(|s| s.trim().to_string())
        .take(MAX_TASKS)
        .collect()
}

/// Sentences containing a date, time, or numeric literal, capped at 12.
pub fn detect_numbers_dates(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| NUM_DATE_RE.is_match(s))
        .map(|s| s.trim().to_string())
        .take(MAX_NUMBERS_DATES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sents(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decision_bilingual() {
        assert!(is_decision("We Decided to ship on Friday"));
        assert!(is_decision("قررنا تأجيل الإطلاق"));
        assert!(!is_decision("let's talk tomorrow"));
    }

    #[test]
    fn test_task_detection() {
        assert!(is_task("Action: update the deck"));
        assert!(is_task("مطلوب تجهيز التقرير"));
    }

    #[test]
    fn test_decisions_capped_and_ordered() {
        let many: Vec<String> = (0..20).map(|i| format!("we decided item {i}")).collect();
        let out = detect_decisions(&many);
        assert_eq!(out.len(), 12);
        assert_eq!(out[0], "we decided item 0");
    }

    #[test]
    fn test_numbers_dates_patterns() {
        let s = sents(&[
            "meeting on 12/03/2024",
            "call at 3 pm",
            "budget is 1500.50",
            "no figures here",
        ]);
        let out = detect_numbers_dates(&s);
        assert_eq!(out.len(), 3);
    }
}
