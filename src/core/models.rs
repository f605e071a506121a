//! Core data models for the relay

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::{RelayError, Result};

/// Which generative-language provider backs the refinement step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    /// Google Gemini generateContent API
    Gemini,
    /// Refinement disabled
    None,
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiProvider::Gemini => write!(f, "gemini"),
            AiProvider::None => write!(f, "none"),
        }
    }
}

impl FromStr for AiProvider {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(AiProvider::Gemini),
            "none" | "" => Ok(AiProvider::None),
            other => Err(RelayError::ConfigError {
                message: format!("Unknown AI provider: {}", other),
            }),
        }
    }
}

/// Translation request, created per HTTP request and discarded after the
/// response is sent
///
/// `text` and `target` are required on the wire but deserialized with
/// defaults so that an absent field is rejected by [`validate`] with a
/// 400 rather than a deserialization failure.
///
/// [`validate`]: TranslateRequest::validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate
    #[serde(default)]
    pub text: String,
    /// Target language name or provider code
    #[serde(default)]
    pub target: String,
    /// Source language name or provider code; detected when absent
    #[serde(default)]
    pub source: Option<String>,
    /// Whether to run the optional refinement step
    #[serde(default = "default_refine")]
    pub refine: bool,
}

fn default_refine() -> bool {
    true
}

impl TranslateRequest {
    /// Create a request with refinement enabled and no source language
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
            source: None,
            refine: true,
        }
    }

    /// Set the source language
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Disable the refinement step
    pub fn without_refinement(mut self) -> Self {
        self.refine = false;
        self
    }

    /// Reject requests that must never reach a provider call
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(RelayError::MissingField {
                field: "text".to_string(),
            });
        }
        if self.target.trim().is_empty() {
            return Err(RelayError::MissingField {
                field: "target".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of a relayed translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutcome {
    /// Translated text, or the no-translation marker
    pub translation: String,
    /// Source code reported by the detection probe, when detection ran
    pub detected_source: Option<String>,
    /// Language pair sent to the translation provider, `src|tgt`
    pub resolved_pair: String,
    /// Whether the refinement step produced the forwarded text
    pub refined: bool,
}
