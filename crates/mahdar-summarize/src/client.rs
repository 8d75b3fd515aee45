//! HTTP client for the inference endpoint with two-tier protocol fallback.
//!
//! Tries the conversational protocol (`/api/chat`) first; on 404 or any
//! other failure it retries once against the completion protocol
//! (`/api/generate`). Errors from the fallback attempt propagate.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use tracing::debug;

use mahdar_core::{EndpointConfig, Error, Result};

use crate::prompt::SYSTEM_PROMPT;

pub struct EndpointClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl EndpointClient {
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        // Proxies are bypassed: the endpoint is typically on localhost and
        // an OS-level proxy would otherwise intercept the call.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .no_proxy()
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            model: config.model.clone(),
        })
    }

    /// Send a prompt, returning the raw text content of the response.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        match self.chat(prompt).await {
            Ok(content) => Ok(content),
            Err(e) => {
                debug!("chat protocol failed ({e}), falling back to generate");
                self.generate(prompt).await
            }
        }
    }

    /// `POST {base}/api/chat` with `{model, stream:false, messages}`,
    /// expecting `{message:{content}}`.
    async fn chat(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "stream": false,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
        });

        let resp = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::Endpoint("chat endpoint not found".into()));
        }
        if !resp.status().is_success() {
            return Err(Error::Endpoint(format!(
                "chat endpoint returned {}",
                resp.status()
            )));
        }

        let data: serde_json::Value = resp.json().await?;
        Ok(data["message"]["content"].as_str().unwrap_or_default().to_string())
    }

    /// `POST {base}/api/generate` with `{model, prompt, stream:false}`,
    /// expecting `{response}`.
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });

        let resp = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Endpoint(format!(
                "generate endpoint returned {}",
                resp.status()
            )));
        }

        let data: serde_json::Value = resp.json().await?;
        Ok(data["response"].as_str().unwrap_or_default().to_string())
    }
}
