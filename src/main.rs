//! Main entry point for the translation relay CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod core;
mod server;

use cli::commands::Commands;

/// Translation relay - HTTP relay between an AI refinement provider and a
/// public translation API
#[derive(Parser, Debug)]
#[command(name = "translation-relay", version, about, long_about = None)]
struct Args {
    /// Gemini API key (optional, defaults to GEMINI_API_KEY env var)
    #[arg(long)]
    gemini_api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("translation_relay={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Override config with CLI args if provided
    if let Some(gemini_api_key) = args.gemini_api_key {
        std::env::set_var("GEMINI_API_KEY", gemini_api_key);
    }

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    // Execute command
    match args.command {
        Some(Commands::Serve { host, port, debug }) => {
            cli::commands::handle_serve(host, port, debug).await?;
        }
        Some(Commands::Translate {
            text,
            target,
            source,
            no_refine,
        }) => {
            cli::commands::handle_translate(text, target, source, no_refine).await?;
        }
        Some(Commands::Status) => {
            cli::commands::handle_status().await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
