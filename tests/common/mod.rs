//! Common test utilities for integration tests.
//!
//! Builds real clients against a wiremock server so every integration test
//! exercises the full stack: service, client, reqwest transport, and the
//! wire transformers.

use fukabori::client::ApiClient;
use fukabori::config::ApiConfig;
use wiremock::MockServer;

/// Config pointed at a wiremock server, with the default route prefix.
pub fn test_config(server: &MockServer) -> ApiConfig {
    ApiConfig::default().with_base_url(server.uri())
}

/// Full-stack client (real HTTP transport) against a wiremock server.
pub fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(test_config(server)).expect("client should build from test config")
}
