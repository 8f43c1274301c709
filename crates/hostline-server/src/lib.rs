//! Hostline server library logic.

pub mod api_voice;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use hostline_dialog::FaqTable;
use hostline_fallback::FallbackClient;
use serde_json::{json, Value};
use std::sync::Arc;

/// Maximum request body size (64 KiB). Webhook bodies carry one
/// transcription at most; anything larger is not a call event.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Application state shared across all request handlers.
///
/// Everything here is read-only after startup; concurrent requests
/// share it without coordination.
#[derive(Clone)]
pub struct AppState {
    /// Transfer destination for agent requests, if configured.
    pub support_number: Option<String>,
    /// The intent/FAQ lookup table.
    pub faq: Arc<FaqTable>,
    /// Generative-fallback collaborator client.
    pub fallback: Arc<FallbackClient>,
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
///
/// `/voice` registers POST only; axum answers other methods on the
/// path with `405 Method Not Allowed`. `/incoming-call` accepts both
/// verbs the provider may use for the call-start event.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_voice::index_handler))
        .route("/health", get(health))
        .route(
            "/incoming-call",
            get(api_voice::incoming_call_handler).post(api_voice::incoming_call_handler),
        )
        .route("/voice", post(api_voice::voice_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(Extension(Arc::new(state)))
}
