//! Refinement provider adapter
//!
//! Wraps the generative-language provider used to polish input text before
//! translation. Failures here are recovered by the dispatcher; the adapter
//! only reports them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::core::config::RelayConfig;
use crate::core::errors::{RelayError, Result};

/// Polishes text prior to translation
#[async_trait]
pub trait Refiner: Send + Sync {
    /// Refine `text`, written in the language called `language`
    ///
    /// Implementations return the polished text, or the input unchanged when
    /// refinement is not available.
    async fn refine(&self, text: &str, language: &str) -> Result<String>;
}

/// Gemini generateContent client with a bounded wait
pub struct GeminiRefiner {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiRefiner {
    /// Create a refiner from configuration, reusing a shared HTTP client
    pub fn from_config(config: &RelayConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: config.gemini_endpoint.clone(),
            api_key: config.gemini_api_key.clone(),
            timeout: Duration::from_millis(config.refine_timeout_ms),
        }
    }

    async fn call_gemini(&self, prompt: &str, api_key: &str) -> Result<String> {
        let url = format!("{}?key={}", self.endpoint, api_key);

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RelayError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: GeminiResponse =
            response
                .json()
                .await
                .map_err(|e| RelayError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        extract_candidate_text(body)
    }
}

#[async_trait]
impl Refiner for GeminiRefiner {
    async fn refine(&self, text: &str, language: &str) -> Result<String> {
        // No credential means no call at all
        let Some(api_key) = self.api_key.clone() else {
            debug!("No refinement credential configured, passing text through");
            return Ok(text.to_string());
        };

        let prompt = build_refine_prompt(text, language);

        match tokio::time::timeout(self.timeout, self.call_gemini(&prompt, &api_key)).await {
            Ok(result) => result,
            Err(_) => Err(RelayError::TimeoutError),
        }
    }
}

/// Build the fixed instructional prompt embedding text and language name
fn build_refine_prompt(text: &str, language: &str) -> String {
    format!(
        "Correct the grammar, spelling and punctuation of the following {language} text. \
         Do not change its meaning or tone. \
         Output only the corrected text, nothing else.\n\n{text}"
    )
}

/// Pull the first candidate's text out of a generateContent response
fn extract_candidate_text(response: GeminiResponse) -> Result<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| RelayError::InvalidResponseError {
            message: "No candidate text in response".to_string(),
        })
}

// Gemini API types
#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::AiProvider;

    fn refiner_without_credential() -> GeminiRefiner {
        let config = RelayConfig {
            provider: AiProvider::Gemini,
            gemini_api_key: None,
            ..Default::default()
        };
        GeminiRefiner::from_config(&config, reqwest::Client::new())
    }

    #[test]
    fn test_build_refine_prompt() {
        let prompt = build_refine_prompt("helo wrld", "English");
        assert!(prompt.contains("English"));
        assert!(prompt.contains("helo wrld"));
        assert!(prompt.contains("Output only the corrected text"));
    }

    #[test]
    fn test_extract_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello, world."}], "role": "model"}}
            ]
        }"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_candidate_text(response).unwrap(), "Hello, world.");
    }

    #[test]
    fn test_extract_rejects_empty_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(
            extract_candidate_text(response),
            Err(RelayError::InvalidResponseError { .. })
        ));
    }

    #[test]
    fn test_extract_rejects_blank_text() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert!(extract_candidate_text(response).is_err());
    }

    #[tokio::test]
    async fn test_refine_without_credential_returns_input_unchanged() {
        let refiner = refiner_without_credential();
        let result = refiner.refine("helo wrld", "English").await.unwrap();
        assert_eq!(result, "helo wrld");
    }
}
