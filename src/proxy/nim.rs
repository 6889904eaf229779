//! NVIDIA NIM upstream client
//!
//! Issues the single outbound call behind every forwarded chat completion
//! and maps upstream failures onto the caller-facing error taxonomy.

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    config::Config,
    error::{ProxyError, ProxyResult},
};

/// Client for the NVIDIA NIM chat completions API
pub struct NimClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl NimClient {
    /// Create a new NIM client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.nim_api_base.clone(),
            api_key: config.nim_api_key.clone(),
            timeout_secs: config.request_timeout_secs,
        }
    }

    /// Forward a chat completion request
    ///
    /// Exactly one outbound call per invocation: success bodies are relayed
    /// verbatim, anything else becomes a classified [`ProxyError`].
    pub async fn chat_completions<T: Serialize>(&self, request: &T) -> ProxyResult<Response<Body>> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, "Forwarding chat completion to NVIDIA NIM");

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "NVIDIA NIM request failed");
                if e.is_timeout() {
                    ProxyError::Transport(format!(
                        "NVIDIA NIM request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    ProxyError::Transport(format!("NVIDIA NIM request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Self::relay_body(response);
        }

        Err(Self::classify_failure(status, response).await)
    }

    /// Map a non-success upstream response onto the error taxonomy
    async fn classify_failure(status: StatusCode, response: reqwest::Response) -> ProxyError {
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "NVIDIA NIM returned an error");

        match status {
            StatusCode::TOO_MANY_REQUESTS => ProxyError::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProxyError::Unauthorized { status },
            _ => ProxyError::Upstream {
                status,
                message: upstream_error_message(&body).unwrap_or_else(|| {
                    format!("NVIDIA NIM API error (status {})", status.as_u16())
                }),
            },
        }
    }

    /// Relay a successful upstream body without re-serializing it
    fn relay_body(response: reqwest::Response) -> ProxyResult<Response<Body>> {
        let mut builder = Response::builder().status(StatusCode::OK);

        if let Some(content_type) = response.headers().get(header::CONTENT_TYPE) {
            builder = builder.header(header::CONTENT_TYPE, content_type.clone());
        }

        builder
            .body(Body::from_stream(response.bytes_stream()))
            .map_err(|e| ProxyError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
    }

    /// Build headers for the outbound request
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        // A key with non-header characters is skipped; the upstream then
        // rejects the call and the failure surfaces as an auth error
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

/// Extract `error.message` from an upstream error body, if present
fn upstream_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(|s| s.to_string())
}
