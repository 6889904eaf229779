//! Health check endpoint
//!
//! Reports the service identity and active upstream configuration. Never
//! contacts the upstream.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "NVIDIA NIM Proxy";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub model: String,
    pub api_base: String,
}

/// Liveness and configuration probe
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        model: state.config.nim_model.clone(),
        api_base: state.config.nim_api_base.clone(),
    })
}
