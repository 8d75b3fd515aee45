//! The `Summarizer` capability and its two implementations.
//!
//! `OllamaSummarizer` calls the external inference endpoint;
//! `HeuristicSummarizer` wraps the deterministic pipeline. The caller
//! picks one explicitly.

use async_trait::async_trait;
use tracing::{debug, info};

use mahdar_analyze::build_smart_summary;
use mahdar_core::{EndpointConfig, Language, Result};

use crate::chunk::{chunk_text, CHUNK_SIZE, MAX_CHUNKS, MAX_SINGLE_PASS_CHARS};
use crate::client::EndpointClient;
use crate::fallback::extractive_summary;
use crate::format::format_summary;
use crate::parse::parse_structured;
use crate::prompt::{part_title, structured_prompt};
use crate::types::StructuredSummary;

/// Produce a structured summary of a meeting transcript.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        transcript: &str,
        title: &str,
        lang: Language,
    ) -> Result<StructuredSummary>;
}

/// LLM-backed summarizer against a local inference endpoint.
pub struct OllamaSummarizer {
    client: EndpointClient,
}

impl OllamaSummarizer {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        Ok(Self {
            client: EndpointClient::new(config)?,
        })
    }

    /// Full run: structured summarization rendered as prose.
    pub async fn summarize_meeting(
        &self,
        transcript: &str,
        title: &str,
        lang: Language,
    ) -> Result<String> {
        let result = self.summarize_structured(transcript, title, lang).await?;
        Ok(format_summary(&result, lang))
    }

    /// Structured summarization with chunking for long transcripts.
    ///
    /// A blank transcript returns an empty result without any network
    /// call. Transcripts over 12k characters are summarized chunk by
    /// chunk, then the concatenated chunk summaries go through one final
    /// single-pass summarization.
    pub async fn summarize_structured(
        &self,
        transcript: &str,
        title: &str,
        lang: Language,
    ) -> Result<StructuredSummary> {
        let text = transcript.trim();
        if text.is_empty() {
            return Ok(StructuredSummary::default());
        }

        if text.chars().count() > MAX_SINGLE_PASS_CHARS {
            let chunks = chunk_text(text, CHUNK_SIZE, MAX_CHUNKS);
            info!("transcript over single-pass limit, split into {} chunks", chunks.len());
            let mut merged: Vec<String> = Vec::with_capacity(chunks.len());
            for (i, chunk) in chunks.iter().enumerate() {
                let chunk_title = part_title(title, i + 1, lang);
                merged.push(self.summarize_chunk(chunk, &chunk_title, lang).await?);
            }
            return self.summarize_once(&merged.join("\n\n"), title, lang).await;
        }

        self.summarize_once(text, title, lang).await
    }

    /// Compact pass over one chunk; yields plain summary text.
    async fn summarize_chunk(&self, text: &str, title: &str, lang: Language) -> Result<String> {
        let prompt = structured_prompt(text, lang, title, true);
        let response = self.client.complete(&prompt).await?;
        if let Some(parsed) = parse_structured(&response) {
            let summary = StructuredSummary::from_value(&parsed).summary;
            if !summary.is_empty() {
                return Ok(summary);
            }
        }
        debug!("chunk response had no usable summary, using extractive text");
        Ok(extractive_summary(text))
    }

    async fn summarize_once(
        &self,
        text: &str,
        title: &str,
        lang: Language,
    ) -> Result<StructuredSummary> {
        let prompt = structured_prompt(text, lang, title, false);
        let response = self.client.complete(&prompt).await?;

        match parse_structured(&response) {
            Some(parsed) => Ok(StructuredSummary::from_value(&parsed)),
            None => {
                debug!("no structured result in response, using extractive fallback");
                Ok(StructuredSummary {
                    summary: extractive_summary(text),
                    ..Default::default()
                })
            }
        }
    }
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn summarize(
        &self,
        transcript: &str,
        title: &str,
        lang: Language,
    ) -> Result<StructuredSummary> {
        self.summarize_structured(transcript, title, lang).await
    }
}

/// Fully local summarizer: runs the heuristic pipeline and flattens its
/// result into the structured shape.
#[derive(Debug, Default)]
pub struct HeuristicSummarizer;

#[async_trait]
impl Summarizer for HeuristicSummarizer {
    async fn summarize(
        &self,
        transcript: &str,
        _title: &str,
        _lang: Language,
    ) -> Result<StructuredSummary> {
        let smart = build_smart_summary(transcript);
        Ok(StructuredSummary {
            summary: smart.bullets.join("\n"),
            topics: smart.topics.into_iter().map(|(label, _)| label).collect(),
            decisions: smart.decisions,
            tasks: smart.tasks,
            speakers: smart.speakers.into_iter().map(|(label, _)| label).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_transcript_makes_no_network_call() {
        // unroutable port: any attempted call would error out
        let cfg = EndpointConfig::new("http://127.0.0.1:1", "test", 1);
        let s = OllamaSummarizer::new(&cfg).unwrap();
        let out = s.summarize("   \n  ", "t", Language::En).await.unwrap();
        assert_eq!(out, StructuredSummary::default());
    }

    #[tokio::test]
    async fn test_heuristic_summarizer_flattens() {
        let out = HeuristicSummarizer
            .summarize(
                "Speaker 1: we decided to approve the plan.\nSpeaker 2: action item for Sara.",
                "t",
                Language::En,
            )
            .await
            .unwrap();
        assert!(!out.summary.is_empty());
        assert_eq!(out.decisions.len(), 1);
        assert!(out.speakers.contains(&"Speaker 1".to_string()));
        assert!(out.speakers.contains(&"Speaker 2".to_string()));
    }
}
