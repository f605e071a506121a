//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::core::config::RelayConfig;
use crate::core::errors::RelayError;
use crate::core::models::TranslateRequest;
use crate::core::relay::RelayService;

/// Application state
#[derive(Clone)]
pub struct AppState {
    relay: Arc<RelayService>,
}

impl AppState {
    /// Wrap a relay service for the router
    pub fn new(relay: Arc<RelayService>) -> Self {
        Self { relay }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Success payload for `/translate`
#[derive(Serialize, Debug)]
pub struct TranslateResponse {
    /// Translated text
    pub translation: String,
}

/// Payload for `/ai-status`
#[derive(Serialize)]
pub struct AiStatusResponse {
    /// Configured provider name, `gemini` or `none`
    pub provider: String,
    /// Whether refinement is actually available
    #[serde(rename = "geminiEnabled")]
    pub gemini_enabled: bool,
}

/// Payload for `/ping`
#[derive(Serialize)]
pub struct PingResponse {
    /// Always true on a live service
    pub ok: bool,
    /// Configured provider name
    pub provider: String,
    /// Whether refinement is actually available
    #[serde(rename = "geminiEnabled")]
    pub gemini_enabled: bool,
}

/// Health check handler
async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<axum::Json<TranslateResponse>, RelayError> {
    let outcome = state.relay.handle(&payload).await?;
    Ok(axum::Json(TranslateResponse {
        translation: outcome.translation,
    }))
}

/// Provider status handler, served on both GET and POST
async fn ai_status(State(state): State<AppState>) -> axum::Json<AiStatusResponse> {
    let config = state.relay.config();
    axum::Json(AiStatusResponse {
        provider: config.provider_name(),
        gemini_enabled: config.refinement_enabled(),
    })
}

/// Liveness handler
async fn ping(State(state): State<AppState>) -> axum::Json<PingResponse> {
    let config = state.relay.config();
    axum::Json(PingResponse {
        ok: true,
        provider: config.provider_name(),
        gemini_enabled: config.refinement_enabled(),
    })
}

/// Build the relay router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .route("/ai-status", get(ai_status).post(ai_status))
        .route("/ping", get(ping))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, config: RelayConfig) -> anyhow::Result<()> {
    let relay = Arc::new(RelayService::from_config(config)?);
    let state = AppState::new(relay);

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
