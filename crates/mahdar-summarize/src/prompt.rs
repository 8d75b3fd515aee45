//! Bilingual prompt construction for structured summarization.

use mahdar_core::Language;

/// System message used on the chat protocol.
pub const SYSTEM_PROMPT: &str = "You are an expert meeting summarizer. Return only JSON.";

/// Title suffix for the i-th chunk of a long transcript.
pub fn part_title(title: &str, index: usize, lang: Language) -> String {
    match lang {
        Language::Ar => format!("{title} (جزء {index})"),
        Language::En => format!("{title} (part {index})"),
    }
}

/// Build the instruction prompt: style directive, terseness directive,
/// JSON-only contract with the expected keys, title, transcript.
pub fn structured_prompt(text: &str, lang: Language, title: &str, compact: bool) -> String {
    let (style, extra) = match (lang, compact) {
        (Language::Ar, true) => ("اكتب بالعربية الفصحى وبشكل رسمي.", "اجعل الملخص قصيراً."),
        (Language::Ar, false) => ("اكتب بالعربية الفصحى وبشكل رسمي.", "اجعل الملخص واضحاً ومفصلاً."),
        (Language::En, true) => ("Write in English, formal and clear.", "Keep it short."),
        (Language::En, false) => ("Write in English, formal and clear.", "Make it clear and detailed."),
    };

    format!(
        "{style}\n{extra}\n\n\
         Return ONLY valid JSON (no markdown).\n\
         Keys:\n\
         - summary: string\n\
         - topics: array of strings\n\
         - decisions: array of strings\n\
         - tasks: array of strings (include assignee if known)\n\
         - speakers: array of strings (if detectable, else empty)\n\n\
         Title: {title}\n\n\
         Transcript:\n{text}"
    )
}
