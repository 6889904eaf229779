//! Error types for nimgate
//!
//! Every upstream or transport failure is surfaced to the caller as a
//! single normalized JSON envelope:
//! `{"error": {"message": ..., "type": ..., "code": ...}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures produced while forwarding a request upstream
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Upstream answered 429
    #[error("Rate limit exceeded. Please wait.")]
    RateLimited,

    /// Upstream answered 401 or 403; the original status is preserved
    #[error("Invalid API key or unauthorized.")]
    Unauthorized { status: StatusCode },

    /// Upstream answered with any other non-success status
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// The outbound call produced no response (timeout, connect failure)
    #[error("{0}")]
    Transport(String),

    /// Failure before or after the outbound call itself
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ProxyError {
    /// HTTP status returned to the caller
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::Unauthorized { status } => *status,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error taxonomy label reported in the envelope
    fn error_type(&self) -> &'static str {
        match self {
            ProxyError::RateLimited => "rate_limit_error",
            ProxyError::Unauthorized { .. } => "auth_error",
            ProxyError::Upstream { .. } | ProxyError::Transport(_) | ProxyError::Internal(_) => {
                "api_error"
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: u16,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = ErrorEnvelope {
            error: ErrorBody {
                message: self.to_string(),
                kind: self.error_type().to_string(),
                code: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type ProxyResult<T> = Result<T, ProxyError>;
