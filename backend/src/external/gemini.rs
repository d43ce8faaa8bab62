//! Gemini client
//!
//! Sends a [`PromptDocument`] to the `generateContent` endpoint in forced JSON
//! mode and parses the reply text into an [`AnalysisResult`]. One attempt per
//! call; the only resilience is the client timeout.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{AnalysisResult, PromptDocument, Schema};
use thiserror::Error;

use crate::config::GeminiConfig;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error("Gemini request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no response from backend")]
    EmptyReply,

    #[error("malformed analysis JSON: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

/// Client for the generative backend
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig<'a> {
    pub response_mime_type: &'static str,
    pub response_schema: &'a Schema,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(prompt: &'a PromptDocument) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.instruction.clone()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &prompt.schema,
            },
        }
    }
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new GeminiClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one analysis
    pub async fn generate(&self, prompt: &PromptDocument) -> Result<AnalysisResult, GeminiError> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        tracing::debug!(%url, model = %self.model, "generateContent");

        // the key travels as a header so it never appears in a logged URL
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .map_err(|e| GeminiError::Transport(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::Transport(e.without_url()))?;
        let text = extract_reply_text(&body)?;
        Ok(AnalysisResult::from_json(&text)?)
    }
}

/// First text part of the first candidate. A missing or blank text is an
/// empty reply.
pub fn extract_reply_text(body: &str) -> Result<String, GeminiError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().find_map(|p| p.text))
        .filter(|text| !text.trim().is_empty())
        .ok_or(GeminiError::EmptyReply)
}
