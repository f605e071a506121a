//! CLI command definitions and handlers

use clap::Subcommand;

use crate::core::config::RelayConfig;
use crate::core::models::TranslateRequest;
use crate::core::relay::RelayService;

/// Commands for the translation relay
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP relay server
    Serve {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate a single text from the command line
    Translate {
        /// Text to translate
        text: String,

        /// Target language name or code
        #[arg(short, long)]
        target: String,

        /// Source language name or code (detected if not specified)
        #[arg(short, long)]
        source: Option<String>,

        /// Skip the AI refinement step
        #[arg(long)]
        no_refine: bool,
    },

    /// Show provider and credential status
    Status,
}

/// Handle server command
pub async fn handle_serve(host: String, port: u16, debug: bool) -> anyhow::Result<()> {
    use crate::server::api::run_server;
    use tracing::info;

    if debug {
        std::env::set_var("RUST_LOG", "debug");
    }

    let config = RelayConfig::from_env()?;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Relay starting on http://{}:{}", host, port);
    println!("   POST /translate, GET /ping, GET|POST /ai-status");

    run_server(host, port, config).await?;

    Ok(())
}

/// Handle one-shot translation command
pub async fn handle_translate(
    text: String,
    target: String,
    source: Option<String>,
    no_refine: bool,
) -> anyhow::Result<()> {
    use tracing::info;

    let config = RelayConfig::from_env()?;
    let relay = RelayService::from_config(config)?;

    let mut request = TranslateRequest::new(text, target);
    if let Some(source) = source {
        request = request.with_source(source);
    }
    if no_refine {
        request = request.without_refinement();
    }

    info!("Translating via pair resolution");

    let outcome = relay.handle(&request).await?;

    println!("{}", outcome.translation);
    if let Some(detected) = outcome.detected_source {
        eprintln!("(detected source: {})", detected);
    }
    if outcome.refined {
        eprintln!("(text was refined before translation)");
    }

    Ok(())
}

/// Handle status command
pub async fn handle_status() -> anyhow::Result<()> {
    let config = RelayConfig::from_env()?;
    config.validate()?;

    println!("Provider:   {}", config.provider_name());
    println!(
        "Refinement: {}",
        if config.refinement_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("Gemini endpoint:    {}", config.gemini_endpoint);
    println!("Translate endpoint: {}", config.translate_endpoint);

    Ok(())
}
