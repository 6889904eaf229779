//! nimgate - Forwarding proxy for the NVIDIA NIM chat completions API
//!
//! This library provides the core functionality for the nimgate proxy
//! server. It translates one inbound chat completion call into one outbound
//! NIM API call, injecting the server-held credential and normalizing
//! upstream failures into a single error envelope.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{ProxyError, ProxyResult};
pub use crate::proxy::NimClient;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub nim: NimClient,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // HTTP client with connection pooling; the timeout bounds every
        // outbound call
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let nim = NimClient::new(http_client, &config);

        Ok(Self { config, nim })
    }
}
