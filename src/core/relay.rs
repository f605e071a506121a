//! Request dispatcher
//!
//! Runs the relay pipeline: validate, optionally refine, resolve the
//! language pair, translate. Refinement and detection failures are recovered
//! here; only missing request fields or a true pipeline failure escape to
//! the caller.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::config::RelayConfig;
use crate::core::errors::Result;
use crate::core::languages;
use crate::core::models::{TranslateRequest, TranslationOutcome};
use crate::core::refiner::{GeminiRefiner, Refiner};
use crate::core::translator::{MemoryTranslator, Translator};

/// Stateless relay pipeline; every request is fully independent
pub struct RelayService {
    config: RelayConfig,
    refiner: Arc<dyn Refiner>,
    translator: Arc<dyn Translator>,
}

impl RelayService {
    /// Create a relay with explicit provider adapters
    pub fn new(
        config: RelayConfig,
        refiner: Arc<dyn Refiner>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            config,
            refiner,
            translator,
        }
    }

    /// Wire the real provider adapters from configuration
    pub fn from_config(config: RelayConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder().build()?;
        let refiner = Arc::new(GeminiRefiner::from_config(&config, client.clone()));
        let translator = Arc::new(MemoryTranslator::from_config(&config, client));

        Ok(Self::new(config, refiner, translator))
    }

    /// Relay configuration
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Run the full pipeline for one request
    pub async fn handle(&self, request: &TranslateRequest) -> Result<TranslationOutcome> {
        request.validate()?;

        // Step 1: optional refinement, never fatal
        let (text, refined) = self.refine_text(request).await;

        // Step 2: language resolution
        let (source_code, detected_source) = self.resolve_source(request, &text).await;
        let target_code = languages::resolve(&request.target).to_string();
        let resolved_pair = format!("{}|{}", source_code, target_code);

        // Step 3: translation
        let translation = self
            .translator
            .translate(&text, &source_code, &target_code)
            .await?;

        Ok(TranslationOutcome {
            translation,
            detected_source,
            resolved_pair,
            refined,
        })
    }

    /// Run the refinement step when enabled; any failure falls back to the
    /// original text
    async fn refine_text(&self, request: &TranslateRequest) -> (String, bool) {
        if !self.config.refinement_enabled() || !request.refine {
            return (request.text.clone(), false);
        }

        let language = request.source.as_deref().unwrap_or("English");
        match self.refiner.refine(&request.text, language).await {
            Ok(polished) => {
                debug!("Refinement produced {} chars", polished.len());
                (polished, true)
            }
            Err(e) => {
                warn!("Refinement failed, using original text: {}", e);
                (request.text.clone(), false)
            }
        }
    }

    /// Resolve the source code from the request, or probe the provider when
    /// the caller did not supply one
    async fn resolve_source(
        &self,
        request: &TranslateRequest,
        text: &str,
    ) -> (String, Option<String>) {
        if let Some(source) = &request.source {
            return (languages::resolve(source).to_string(), None);
        }

        match self.translator.detect(text).await {
            Ok(Some(code)) => (code.clone(), Some(code)),
            Ok(None) => {
                debug!("Detection inconclusive, falling back to {}", languages::DETECTION_FALLBACK);
                (languages::DETECTION_FALLBACK.to_string(), None)
            }
            Err(e) => {
                warn!("Detection probe failed, falling back to {}: {}", languages::DETECTION_FALLBACK, e);
                (languages::DETECTION_FALLBACK.to_string(), None)
            }
        }
    }
}
