//! Configuration management for nimgate
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// NVIDIA NIM API base used when `NIM_API_BASE` is not set
pub const DEFAULT_API_BASE: &str = "https://integrate.api.nvidia.com/v1";

/// Model identifier used when `NIM_MODEL` is not set
pub const DEFAULT_MODEL: &str = "z-ai/glm4.7";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// NVIDIA NIM API base URL
    pub nim_api_base: String,
    /// NVIDIA NIM API key
    ///
    /// A missing key is not a startup error; it surfaces as an upstream
    /// auth failure on the first forwarded request.
    pub nim_api_key: String,
    /// Model identifier attached to every upstream request
    pub nim_model: String,

    /// Outbound request timeout (in seconds)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("NIMGATE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("NIMGATE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid NIMGATE_PORT")?,

            nim_api_base: env::var("NIM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            nim_api_key: env::var("NIM_API_KEY").unwrap_or_default(),
            nim_model: env::var("NIM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),

            request_timeout_secs: env::var("NIM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .context("Invalid NIM_TIMEOUT_SECS")?,
        })
    }
}
