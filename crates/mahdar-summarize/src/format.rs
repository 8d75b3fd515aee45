//! Render a structured summary as Arabic or English prose.

use mahdar_core::Language;

use crate::types::StructuredSummary;

fn section(name: &str, items: &[String], none_label: &str) -> String {
    if items.is_empty() {
        return format!("{name}:\n- {none_label}\n");
    }
    let bullets: Vec<String> = items.iter().map(|x| format!("- {x}")).collect();
    format!("{name}:\n{}\n", bullets.join("\n"))
}

/// Fixed section order: executive summary, topics, decisions, tasks,
/// speakers. Empty sections render an explicit "none" placeholder.
pub fn format_summary(result: &StructuredSummary, lang: Language) -> String {
    let (exec, topics, decisions, tasks, speakers, none) = match lang {
        Language::Ar => ("ملخص تنفيذي", "محاور الاجتماع", "القرارات", "المهام", "المتحدثون", "لا يوجد"),
        Language::En => ("Executive Summary", "Topics", "Decisions", "Action Items", "Speakers", "None"),
    };

    let summary = result.summary.trim();
    let head = format!(
        "{exec}:\n{}\n",
        if summary.is_empty() { none } else { summary }
    );

    [
        head,
        section(topics, &result.topics, none),
        section(decisions, &result.decisions, none),
        section(tasks, &result.tasks, none),
        section(speakers, &result.speakers, none),
    ]
    .join("\n")
    .trim()
    .to_string()
}
