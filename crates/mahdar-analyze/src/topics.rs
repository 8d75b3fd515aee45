//! Two-phase topic clustering: fixed hint table first, then dynamic
//! topics derived from the unassigned remainder's own keywords.

use crate::keywords::top_keywords;

/// Fixed topic → hint keyword table, matched in order (first match wins).
pub const TOPIC_HINTS: &[(&str, &[&str])] = &[
    (
        "المقدمة والسياق",
        &["افتتاح", "مقدمة", "سياق", "هدف", "الغرض", "introduction", "context", "goal", "purpose"],
    ),
    (
        "نقاط تقنية",
        &["نظام", "خادم", "سيرفر", "قاعدة", "بيانات", "api", "نموذج", "model", "pipeline", "deployment"],
    ),
    (
        "العمل والخطة",
        &["خطة", "جدول", "deadline", "موعد", "مرحلة", "تسليم", "next", "plan", "timeline"],
    ),
    (
        "مشاكل ومخاطر",
        &["مشكلة", "خطأ", "فشل", "خطر", "risk", "issue", "error", "blocked"],
    ),
    (
        "النتائج والتوصيات",
        &["نتيجة", "استنتاج", "توصية", "recommendation", "outcome", "result"],
    ),
];

/// Dynamic topic label prefix and catch-all bucket label.
pub const DYNAMIC_TOPIC_PREFIX: &str = "محور";
pub const OTHER_TOPICS_LABEL: &str = "محاور أخرى";

const MAX_DYNAMIC_TOPICS: usize = 4;
const MAX_SENTENCES_PER_TOPIC: usize = 6;
const DYNAMIC_KEYWORD_POOL: usize = 8;

/// Group sentences into ordered (label, sentences) topic buckets.
///
/// Phase 1 assigns each sentence to the first fixed topic whose hint list
/// it contains. Phase 2 re-buckets the unassigned remainder by its own
/// top-8 keywords, keeping the 4 largest dynamic buckets (first formed
/// wins ties). Every surviving bucket is trimmed to its first 6 sentences;
/// empty buckets are omitted.
pub fn group_by_topics(sentences: &[String]) -> Vec<(String, Vec<String>)> {
    let mut fixed: Vec<(String, Vec<String>)> = TOPIC_HINTS
        .iter()
        .map(|(label, _)| (label.to_string(), Vec::new()))
        .collect();
    let mut unassigned: Vec<String> = Vec::new();

    for sentence in sentences {
        let lower = sentence.to_lowercase();
        let slot = TOPIC_HINTS
            .iter()
            .position(|(_, hints)| hints.iter().any(|h| lower.contains(h)));
        match slot {
            Some(i) => fixed[i].1.push(sentence.trim().to_string()),
            None => unassigned.push(sentence.trim().to_string()),
        }
    }

    let mut groups = fixed;

    if !unassigned.is_empty() {
        let pool = top_keywords(&unassigned, DYNAMIC_KEYWORD_POOL);
        if !pool.is_empty() {
            // Bucket under the first pool keyword each sentence contains.
            let mut dynamic: Vec<(String, Vec<String>)> = Vec::new();
            for sentence in &unassigned {
                let lower = sentence.to_lowercase();
                let label = pool
                    .iter()
                    .find(|kw| lower.contains(kw.as_str()))
                    .map(|kw| format!("{DYNAMIC_TOPIC_PREFIX}: {kw}"))
                    .unwrap_or_else(|| OTHER_TOPICS_LABEL.to_string());
                match dynamic.iter_mut().find(|(l, _)| *l == label) {
                    Some((_, bucket)) => bucket.push(sentence.clone()),
                    None => dynamic.push((label, vec![sentence.clone()])),
                }
            }

            // Keep the largest dynamic buckets; stable sort keeps
            // first-formed order among equals.
            dynamic.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
            dynamic.truncate(MAX_DYNAMIC_TOPICS);
            groups.extend(dynamic);
        }
    }

    groups
        .into_iter()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(label, mut bucket)| {
            bucket.truncate(MAX_SENTENCES_PER_TOPIC);
            (label, bucket)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sents(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fixed_hint_assignment() {
        let s = sents(&["the deployment pipeline is ready", "we found an issue in billing"]);
        let groups = group_by_topics(&s);
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert!(labels.contains(&"نقاط تقنية"));
        assert!(labels.contains(&"مشاكل ومخاطر"));
    }

    #[test]
    fn test_first_match_wins() {
        // Matches both "نقاط تقنية" (model) and "العمل والخطة" (plan);
        // the earlier table entry takes it.
        let s = sents(&["the model plan needs review"]);
        let groups = group_by_topics(&s);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "نقاط تقنية");
    }

    #[test]
    fn test_dynamic_topics_from_unassigned() {
        let s = sents(&[
            "budget looks tight this quarter",
            "budget approval pending from finance",
            "marketing wants new banners",
        ]);
        let groups = group_by_topics(&s);
        assert!(groups.iter().any(|(l, _)| l == "محور: budget"));
    }

    #[test]
    fn test_dynamic_bucket_cap_keeps_first_formed() {
        // five unassigned sentences, one distinct keyword each; all
        // buckets tie at size 1, so the four formed first survive
        let s = sents(&[
            "it was the budget",
            "it was the hiring",
            "it was the catering",
            "it was the offsite",
            "it was the venue",
        ]);
        let groups = group_by_topics(&s);
        let dynamic: Vec<&str> = groups
            .iter()
            .map(|(l, _)| l.as_str())
            .filter(|l| l.starts_with(DYNAMIC_TOPIC_PREFIX))
            .collect();
        assert_eq!(
            dynamic,
            vec!["محور: budget", "محور: hiring", "محور: catering", "محور: offsite"]
        );
    }

    #[test]
    fn test_groups_capped_at_six() {
        let many: Vec<String> = (0..10).map(|i| format!("pipeline step {i}")).collect();
        let groups = group_by_topics(&many);
        assert_eq!(groups[0].1.len(), 6);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_topics(&[]).is_empty());
    }
}
