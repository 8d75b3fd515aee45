//! Structured summary result shape and lenient JSON field coercion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Model-produced summary with named fields. All lists may be empty;
/// an entirely empty value is the valid result for a blank transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredSummary {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub decisions: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub speakers: Vec<String>,
}

impl StructuredSummary {
    /// Build from an already-parsed JSON object, coercing each field.
    pub fn from_value(value: &Value) -> Self {
        Self {
            summary: value
                .get("summary")
                .map(stringify)
                .unwrap_or_default()
                .trim()
                .to_string(),
            topics: as_string_list(value.get("topics")),
            decisions: as_string_list(value.get("decisions")),
            tasks: as_string_list(value.get("tasks")),
            speakers: as_string_list(value.get("speakers")),
        }
    }
}

fn stringify(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerce a loosely typed JSON field into a clean string list.
///
/// Models return arrays, bullet-prefixed multi-line strings, bare
/// scalars, or nothing at all; all of those are accepted.
pub fn as_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(stringify)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => {
            const BULLET_CHARS: &[char] = &[' ', '-', '•', '\t'];
            s.lines()
                .map(|l| l.trim_matches(BULLET_CHARS).to_string())
                .filter(|l| !l.is_empty())
                .collect()
        }
        Some(other) => {
            let s = stringify(other).trim().to_string();
            if s.is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
    }
}
