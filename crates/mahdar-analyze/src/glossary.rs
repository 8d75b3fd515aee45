//! Transcript cleanup: glossary-driven find/replace applied before analysis.
//!
//! Speech-recognition output tends to mangle project names and jargon the
//! same way every time; a small rule table fixes that deterministically.

use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use mahdar_core::{Error, Result};

#[derive(Debug, Default, Deserialize)]
struct GlossaryFile {
    #[serde(default)]
    replacements: Vec<PlainRule>,
    #[serde(default)]
    regex_replacements: Vec<RegexRule>,
}

#[derive(Debug, Deserialize)]
struct PlainRule {
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: String,
}

#[derive(Debug, Deserialize)]
struct RegexRule {
    #[serde(default)]
    pattern: String,
    #[serde(default)]
    to: String,
}

/// Ordered plain and regex substitution rules.
#[derive(Debug, Default)]
pub struct Glossary {
    plain: Vec<(String, String)>,
    regex: Vec<(Regex, String)>,
}

impl Glossary {
    /// Load rules from a JSON file. A missing file is an empty glossary;
    /// malformed JSON or an invalid pattern is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no glossary at {}, using identity transform", path.display());
            return Ok(Self::default());
        }

        let data: GlossaryFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;

        let plain = data
            .replacements
            .into_iter()
            .map(|r| (r.from.trim().to_string(), r.to.trim().to_string()))
            .filter(|(from, _)| !from.is_empty())
            .collect();

        let mut regex = Vec::new();
        for rule in data.regex_replacements {
            let pattern = rule.pattern.trim();
            if pattern.is_empty() {
                continue;
            }
            let re = Regex::new(pattern)
                .map_err(|e| Error::Config(format!("bad glossary pattern {pattern:?}: {e}")))?;
            regex.push((re, rule.to));
        }

        Ok(Self { plain, regex })
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.regex.is_empty()
    }

    /// Apply all rules in order, then tidy leftover doubled spaces.
    pub fn apply(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut out = text.to_string();
        for (from, to) in &self.plain {
            out = out.replace(from, to);
        }
        for (re, to) in &self.regex {
            out = re.replace_all(&out, to.as_str()).into_owned();
        }

        let mut tidy = String::with_capacity(out.len());
        let mut last_was_space = false;
        for c in out.trim().chars() {
            if c == ' ' {
                if !last_was_space {
                    tidy.push(c);
                }
                last_was_space = true;
            } else {
                tidy.push(c);
                last_was_space = false;
            }
        }
        tidy
    }
}
