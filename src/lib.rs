//! Translation Relay - HTTP relay between an AI refinement provider and a
//! public translation API
//!
//! This library accepts a text-and-target-language request, optionally
//! polishes the text through a generative-language provider, then forwards
//! the (possibly polished) text to a translation provider and returns the
//! result. The relay is exposed both as an HTTP service and as a library.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use self::core::{
    config::RelayConfig,
    errors::RelayError,
    models::{AiProvider, TranslateRequest, TranslationOutcome},
    refiner::{GeminiRefiner, Refiner},
    relay::RelayService,
    translator::{MemoryTranslator, Translator},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
