//! Line-based speaker attribution.
//!
//! Speaker identity comes purely from textual line labels
//! (`Speaker 1: ...`, `المتحدث ٢: ...`, `Sara - ...`); there is no
//! acoustic diarization here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sentences::split_sentences;

/// Label patterns tried in order; first match wins.
static SPEAKER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\s*(Speaker\s*\d+)\s*[:\-]\s*(.+)$",
        r"^\s*(المتحدث\s*\d+)\s*[:\-]\s*(.+)$",
        r"^\s*([A-Za-z][A-Za-z0-9_\- ]{1,25})\s*[:\-]\s*(.+)$",
        r"^\s*([اأإآء-ي][اأإآء-ي0-9_\- ]{1,25})\s*[:\-]\s*(.+)$",
    ]
    .iter()
    .map(|p| {
        Regex::new(&format!("(?i){p}")).unwrap()
    })
    .collect()
});

const MAX_SENTENCES_PER_SPEAKER: usize = 6;

/// Group utterances by detected speaker label, in first-seen order.
///
/// A labeled line sets the current speaker; an unlabeled line continues
/// the current speaker, or is dropped when no speaker is active yet.
/// Each speaker's accumulated text is re-split into sentences and capped
/// at 6. No detected labels at all yields an empty vec.
pub fn group_by_speakers(raw_text: &str) -> Vec<(String, Vec<String>)> {
    let mut speaker_map: Vec<(String, Vec<String>)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in raw_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let hit = SPEAKER_PATTERNS.iter().find_map(|re| {
            re.captures(line)
                .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
        });
        match hit {
            Some((label, utterance)) => {
                let idx = match speaker_map.iter().position(|(l, _)| *l == label) {
                    Some(i) => i,
                    None => {
                        speaker_map.push((label, Vec::new()));
                        speaker_map.len() - 1
                    }
                };
                speaker_map[idx].1.push(utterance);
                current = Some(idx);
            }
            None => {
                if let Some(idx) = current {
                    speaker_map[idx].1.push(line.to_string());
                }
            }
        }
    }

    speaker_map
        .into_iter()
        .map(|(label, utterances)| {
            let joined = utterances.join(" ");
            let mut sents = split_sentences(&joined);
            if sents.is_empty() {
                sents = utterances;
            }
            sents.truncate(MAX_SENTENCES_PER_SPEAKER);
            (label, sents)
        })
        .collect()
}
