use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use overlay_relay::{
    config::{Config, LlmConfig, LogsConfig, OverlayConfig, ServerConfig},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

use super::mocks::MockInferenceClient;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3:latest".to_string(),
            prompt_template: "User: {input}\nChatBot-X:".to_string(),
        },
        overlay: OverlayConfig::default(),
    }
}

/// Build the full router around a mock client
pub fn create_test_app(client: MockInferenceClient) -> (Router, AppState) {
    let state = AppState::new(&create_test_config(), Arc::new(client));
    (server::router(state.clone()), state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn read_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  base_url: "http://gpu-box:11434"
  model: "mistral:7b"
  prompt_template: |
    You are a grumpy pirate. Answer briefly.
    Viewer: {input}
    Pirate:

overlay:
  poll_interval_ms: 1000
  dwell_ms: 5000
"#;

/// Template without the input placeholder
pub const CONFIG_WITHOUT_PLACEHOLDER_YAML: &str = r#"
llm:
  prompt_template: "Tell a joke"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
