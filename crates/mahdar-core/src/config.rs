//! Inference endpoint configuration and output language selection.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "gemma3:4b";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Target language for prompts and rendered summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

impl Language {
    /// Parse a language code by case-insensitive prefix match
    /// ("ar", "ar-SA", "ARA" → Ar; anything else → En).
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ar") {
            Language::Ar
        } else {
            Language::En
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Ar => write!(f, "ar"),
            Language::En => write!(f, "en"),
        }
    }
}

/// External inference endpoint target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the inference server, without the `/api` suffix.
    pub base_url: String,
    /// Model identifier passed in every request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            model: model.into(),
            timeout_secs,
        }
    }

    /// Normalized base URL (trailing slash and trailing `/api` stripped).
    pub fn base_url(&self) -> String {
        normalize_base_url(&self.base_url)
    }
}

/// Strip trailing slashes, then a trailing `/api` segment.
///
/// Users paste URLs like `http://host:11434/api/` from the server docs;
/// paths are appended as `/api/chat` and `/api/generate` by the client.
fn normalize_base_url(url: &str) -> String {
    let mut url = url.trim().trim_end_matches('/').to_string();
    if url.ends_with("/api") {
        url.truncate(url.len() - 4);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let cfg = EndpointConfig::new("http://localhost:11434/api/", "m", 30);
        assert_eq!(cfg.base_url(), "http://localhost:11434");

        let cfg = EndpointConfig::new("http://localhost:11434/", "m", 30);
        assert_eq!(cfg.base_url(), "http://localhost:11434");

        let cfg = EndpointConfig::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_language_prefix_match() {
        assert_eq!(Language::from_code("ar"), Language::Ar);
        assert_eq!(Language::from_code("AR-sa"), Language::Ar);
        assert_eq!(Language::from_code("en-US"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }
}
