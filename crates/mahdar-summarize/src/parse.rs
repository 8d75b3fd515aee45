//! Resilient parsing of model responses.
//!
//! Models asked for "only JSON" still wrap it in prose or code fences
//! often enough that a brace-extraction pass is required.

use serde_json::Value;

/// Parse the response text into a JSON object.
///
/// Tries the whole text first, then the substring from the first `{` to
/// the last `}`. Anything that is not a JSON object counts as no result.
pub fn parse_structured(text: &str) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(v) = serde_json::from_str::<Value>(text) {
        if v.is_object() {
            return Some(v);
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<Value>(&text[start..=end])
        .ok()
        .filter(Value::is_object)
}
