//! Raw `generateContent` calls.
//!
//! One call here is one HTTP request: no retry, no caching. The endpoint is
//! `{base_url}/{model}:generateContent?key=<api key>`, taking a single user
//! turn and answering with candidate text parts.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{TipError, classify_transport};
use crate::retry::{DEFAULT_RETRY_DELAY, RetryPolicy};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    /// Model collection URL, without a trailing slash.
    pub base_url: String,
    pub model: String,
    pub retry_delay: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Build a client. A missing key is not an error here; it surfaces as
    /// [`TipError::Configuration`] on the first request.
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, mut config: GeminiConfig) -> Self {
        config.api_key = config.api_key.filter(|k| !k.trim().is_empty());
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { http, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::with_delay(self.config.retry_delay)
    }

    pub(crate) fn api_key(&self) -> Result<&str, TipError> {
        self.config.api_key.as_deref().ok_or_else(|| {
            TipError::Configuration(
                "No API key configured. Set GEMINI_API_KEY and try again.".to_string(),
            )
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Send one prompt and return the concatenated candidate text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, TipError> {
        let api_key = self.api_key()?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        info!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport)?;

        let value: Option<serde_json::Value> = serde_json::from_str(&body).ok();

        if let Some(err) = value.as_ref().and_then(|v| v.get("error")) {
            let message = err
                .get("message")
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
            debug!(status = status.as_u16(), %message, "upstream reported an error");
            return Err(TipError::Upstream(message));
        }

        if !status.is_success() {
            return Err(TipError::Upstream(format!(
                "request failed with status {}",
                status.as_u16()
            )));
        }

        let value = value.ok_or_else(|| {
            TipError::Upstream("response body is not valid JSON".to_string())
        })?;
        let parsed: GenerateResponse = serde_json::from_value(value)
            .map_err(|e| TipError::Upstream(format!("unexpected response shape: {e}")))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(TipError::Upstream("empty response".to_string()));
        }

        info!(model = %self.config.model, text_len = text.len(), "generateContent complete");

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}
