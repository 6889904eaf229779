//! Common test utilities for nimgate
//!
//! Shared fixtures and the proxy test harness used across integration
//! tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;

use nimgate::{routes, AppState, Config};

use crate::mocks::nim::MockNim;

/// Test configuration constants
pub mod constants {
    /// API key injected into outbound requests during tests
    pub const TEST_NIM_API_KEY: &str = "test-nim-api-key";
    /// Model identifier configured for tests
    pub const TEST_NIM_MODEL: &str = "z-ai/glm4.7";
}

/// Create a config pointing at a mock upstream
pub fn test_config(api_base: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Let OS assign port
        nim_api_base: api_base.to_string(),
        nim_api_key: constants::TEST_NIM_API_KEY.to_string(),
        nim_model: constants::TEST_NIM_MODEL.to_string(),
        request_timeout_secs: 120,
    }
}

/// Test harness wiring the real router to a mock NIM upstream
///
/// # Example
///
/// ```ignore
/// let harness = ProxyTestHarness::new().await;
/// harness.nim.mock_chat_completion_success(simple_completion()).await;
///
/// let response = harness.server
///     .post("/api/v1/chat/completions")
///     .json(&request)
///     .await;
/// ```
pub struct ProxyTestHarness {
    pub server: TestServer,
    pub nim: MockNim,
}

impl ProxyTestHarness {
    /// Create a new test harness with the default outbound timeout
    pub async fn new() -> Self {
        Self::with_timeout(120).await
    }

    /// Create a test harness with a custom outbound timeout
    pub async fn with_timeout(timeout_secs: u64) -> Self {
        let nim = MockNim::start().await;

        let mut config = test_config(&nim.uri());
        config.request_timeout_secs = timeout_secs;

        let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
        let app = routes::create_router(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, nim }
    }
}
