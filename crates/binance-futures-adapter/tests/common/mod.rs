/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::{ClientConfig, Credentials, FuturesClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> FuturesClient {
    FuturesClient::with_config_and_base_url(test_credentials(), ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Split a transmitted parameter string into (signed part, signature)
#[allow(dead_code)]
pub fn split_signature(encoded: &str) -> (&str, &str) {
    encoded
        .rsplit_once("&signature=")
        .expect("signature parameter present")
}
