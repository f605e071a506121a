//! Translation provider adapter
//!
//! The provider exposes a single GET endpoint used both for translation and
//! for the language-detection probe. Translation and detection calls carry
//! no explicit timeout.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::core::config::RelayConfig;
use crate::core::errors::{RelayError, Result};

/// Literal substituted when the provider response lacks the translated-text
/// field; returned to the caller with HTTP 200, not as an error
pub const NO_TRANSLATION_MARKER: &str = "Error: no translation";

/// Pair sent on the detection probe; the provider infers the input language
/// and reports it in the response metadata
const DETECTION_PROBE_PAIR: &str = "Autodetect|en";

/// Translates text and detects source languages
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target` (provider codes)
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;

    /// Probe the provider for the language of `text`
    ///
    /// Returns `None` when the provider cannot determine a language.
    async fn detect(&self, text: &str) -> Result<Option<String>>;
}

/// MyMemory-style translation client
pub struct MemoryTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl MemoryTranslator {
    /// Create a translator from configuration, reusing a shared HTTP client
    pub fn from_config(config: &RelayConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: config.translate_endpoint.clone(),
        }
    }

    async fn query(&self, text: &str, langpair: &str) -> Result<MemoryResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair)])
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

        response
            .json()
            .await
            .map_err(|e| RelayError::InvalidResponseError {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl Translator for MemoryTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let langpair = format!("{}|{}", source, target);
        debug!("Translating with langpair={}", langpair);

        let response = self.query(text, &langpair).await?;
        Ok(translation_from(response))
    }

    async fn detect(&self, text: &str) -> Result<Option<String>> {
        let response = self.query(text, DETECTION_PROBE_PAIR).await?;
        Ok(detected_language_from(response))
    }
}

/// Extract the translated text, substituting the marker when the expected
/// field is absent or empty
fn translation_from(response: MemoryResponse) -> String {
    response
        .response_data
        .and_then(|data| data.translated_text)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| NO_TRANSLATION_MARKER.to_string())
}

/// Extract the detected source code from the probe response metadata
fn detected_language_from(response: MemoryResponse) -> Option<String> {
    response
        .response_metadata
        .and_then(|meta| meta.detected_language)
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
}

// Provider wire types
#[derive(Debug, Deserialize)]
struct MemoryResponse {
    #[serde(rename = "responseData", default)]
    response_data: Option<MemoryResponseData>,
    #[serde(rename = "responseMetadata", default)]
    response_metadata: Option<MemoryResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct MemoryResponseData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MemoryResponseMetadata {
    #[serde(rename = "detectedLanguage", default)]
    detected_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> MemoryResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_translation_from_complete_response() {
        let response = parse(
            r#"{
                "responseData": {"translatedText": "hello"},
                "responseMetadata": {"detectedLanguage": "es"},
                "responseStatus": 200
            }"#,
        );
        assert_eq!(translation_from(response), "hello");
    }

    #[test]
    fn test_translation_marker_when_field_missing() {
        let response = parse(r#"{"responseStatus": 200}"#);
        assert_eq!(translation_from(response), NO_TRANSLATION_MARKER);
    }

    #[test]
    fn test_translation_marker_when_field_empty() {
        let response = parse(r#"{"responseData": {"translatedText": "  "}}"#);
        assert_eq!(translation_from(response), NO_TRANSLATION_MARKER);
    }

    #[test]
    fn test_detected_language_from_metadata() {
        let response = parse(r#"{"responseMetadata": {"detectedLanguage": "es"}}"#);
        assert_eq!(detected_language_from(response).as_deref(), Some("es"));
    }

    #[test]
    fn test_detection_inconclusive_when_metadata_blank() {
        let empty = parse(r#"{"responseMetadata": {"detectedLanguage": ""}}"#);
        let absent = parse(r#"{"responseData": {"translatedText": "x"}}"#);
        assert_eq!(detected_language_from(empty), None);
        assert_eq!(detected_language_from(absent), None);
    }
}
