/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskflow-adapter tests

use taskflow_adapter::{ClientConfig, Credentials, TaskflowClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

#[allow(dead_code)]
/// Client pointed at the mock server with a test client id
pub fn client_for(server: &MockServer) -> TaskflowClient {
    TaskflowClient::with_config(ClientConfig {
        base_url: server.uri(),
        client_id: "test-canvas".to_string(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// Mock bearer token for testing
pub fn mock_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

#[allow(dead_code)]
pub fn mock_credentials() -> Credentials {
    Credentials { token: mock_token() }
}

#[allow(dead_code)]
/// A task record as the backend would return it
pub fn task_record(id: i64, title: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "Id": id,
        "Name": title,
        "title": title,
        "description": "",
        "priority": "medium",
        "status": status,
        "CreatedOn": "2025-01-01T09:00:00Z",
        "ModifiedOn": "2025-01-01T09:30:00Z",
    })
}
