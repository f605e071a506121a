//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::models::AiProvider;

/// Default Gemini generateContent endpoint
const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Default translation provider endpoint
const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Bounded wait applied to the refinement call
const DEFAULT_REFINE_TIMEOUT_MS: u64 = 10_000;

/// Immutable relay configuration, constructed once at startup and passed
/// into the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Which provider backs the refinement step
    pub provider: AiProvider,
    /// Credential for the generative-language provider; absence disables
    /// refinement without disabling the service
    pub gemini_api_key: Option<String>,
    /// Generative-language endpoint
    pub gemini_endpoint: String,
    /// Translation provider endpoint
    pub translate_endpoint: String,
    /// Refinement timeout in milliseconds
    pub refine_timeout_ms: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::Gemini,
            gemini_api_key: None,
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            refine_timeout_ms: DEFAULT_REFINE_TIMEOUT_MS,
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let provider: AiProvider = std::env::var("AI_PROVIDER")
            .unwrap_or_else(|_| "gemini".to_string())
            .parse()?;

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let gemini_endpoint = std::env::var("GEMINI_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_GEMINI_ENDPOINT.to_string());

        let translate_endpoint = std::env::var("TRANSLATE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_ENDPOINT.to_string());

        let refine_timeout_ms = std::env::var("REFINE_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_REFINE_TIMEOUT_MS.to_string())
            .parse::<u64>()?;

        let config = Self {
            provider,
            gemini_api_key,
            gemini_endpoint,
            translate_endpoint,
            refine_timeout_ms,
        };

        if config.refinement_enabled() {
            info!("Refinement enabled via {}", config.provider);
        } else {
            info!("Refinement disabled (provider: {})", config.provider);
        }

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.gemini_endpoint.is_empty() {
            return Err(anyhow::anyhow!("Gemini endpoint is required"));
        }

        if self.translate_endpoint.is_empty() {
            return Err(anyhow::anyhow!("Translate endpoint is required"));
        }

        if self.refine_timeout_ms == 0 {
            return Err(anyhow::anyhow!("refine_timeout_ms must be greater than 0"));
        }

        if self.provider == AiProvider::Gemini && self.gemini_api_key.is_none() {
            warn!("AI provider is gemini but no credential is configured; refinement will be skipped");
        }

        Ok(())
    }

    /// Whether the refinement step may run at all
    pub fn refinement_enabled(&self) -> bool {
        self.provider == AiProvider::Gemini && self.gemini_api_key.is_some()
    }

    /// Provider name as reported on the status endpoints
    pub fn provider_name(&self) -> String {
        self.provider.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = RelayConfig {
            gemini_api_key: Some("test_key".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.refinement_enabled());
    }

    #[test]
    fn test_config_validation_missing_endpoint() {
        let config = RelayConfig {
            translate_endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = RelayConfig {
            refine_timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_refinement_disabled_without_credential() {
        let config = RelayConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.refinement_enabled());
    }

    #[test]
    fn test_refinement_disabled_with_provider_none() {
        let config = RelayConfig {
            provider: AiProvider::None,
            gemini_api_key: Some("test_key".to_string()),
            ..Default::default()
        };
        assert!(!config.refinement_enabled());
        assert_eq!(config.provider_name(), "none");
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relay.json");

        let config = RelayConfig {
            gemini_api_key: Some("test_key".to_string()),
            refine_timeout_ms: 5_000,
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        let loaded = RelayConfig::from_file(&path).unwrap();
        assert_eq!(loaded.provider, AiProvider::Gemini);
        assert_eq!(loaded.gemini_api_key.as_deref(), Some("test_key"));
        assert_eq!(loaded.refine_timeout_ms, 5_000);
    }
}
