//! Chat completions endpoint
//!
//! Forwards caller requests to the NVIDIA NIM API after attaching the
//! configured model and filling in default sampling parameters.

use std::sync::Arc;

use axum::{body::Body, extract::State, http::Response, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ProxyResult, AppState};

/// Sampling temperature used when the caller omits one
const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Completion token budget used when the caller omits one
const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Caller-supplied chat completion request
///
/// Message entries are forwarded untouched; nothing beyond JSON
/// well-formedness is validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<serde_json::Value>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub stream: Option<bool>,
}

/// Payload sent to the upstream API
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamRequest {
    pub model: String,
    pub messages: Vec<serde_json::Value>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

impl UpstreamRequest {
    /// Combine the caller's fields with the configured model and defaults
    pub fn build(request: ChatRequest, model: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: request.messages,
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            stream: request.stream.unwrap_or(false),
        }
    }
}

/// Handle chat completion requests
///
/// One inbound call maps to exactly one upstream call; the upstream body
/// is relayed verbatim and failures arrive as the normalized envelope.
pub async fn chat_completions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> ProxyResult<Response<Body>> {
    let upstream = UpstreamRequest::build(request, &state.config.nim_model);

    info!(
        model = %upstream.model,
        stream = %upstream.stream,
        messages = %upstream.messages.len(),
        "Processing chat completion request"
    );

    state.nim.chat_completions(&upstream).await
}
