//! Test utilities for integration tests
use std::fs;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body};
use tempfile::TempDir;

use victoria::ChatError;
use victoria::ai::chat::Session;
use victoria::api::AppState;
use victoria::api::app;
use victoria::core::{AppConfig, Credential, StaticCredential};
use victoria::openai::{ChatCompletionRequest, Transport};

/// Answers every request with the next canned result. Once the queue
/// runs dry every call fails with a 500.
#[derive(Clone, Default)]
pub struct StubTransport {
    responses: Arc<Mutex<Vec<Result<String, ChatError>>>>,
    pub requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl StubTransport {
    pub fn replying(replies: &[&str]) -> Self {
        let stub = Self::default();
        for reply in replies.iter().rev() {
            let body = serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": reply}}]
            })
            .to_string();
            stub.responses.lock().unwrap().push(Ok(body));
        }
        stub
    }

    #[allow(dead_code)]
    pub fn with_raw_body(body: &str) -> Self {
        let stub = Self::default();
        stub.responses.lock().unwrap().push(Ok(body.to_string()));
        stub
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(
        &self,
        _endpoint: &str,
        payload: &ChatCompletionRequest<'_>,
        _credential: &Credential,
    ) -> Result<String, ChatError> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(payload).unwrap());
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(ChatError::HttpStatus {
                status: 500,
                body: None,
            }))
    }
}

/// Creates a test application router backed by `transport` and a
/// temporary directory of static assets. Keep the returned `TempDir`
/// alive for as long as the router is used.
pub fn test_app(transport: StubTransport) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create static directory");
    fs::write(
        dir.path().join("index.html"),
        "<html><body>Welcome to Victoria</body></html>",
    )
    .expect("Failed to write index.html");

    let config = AppConfig {
        api_hostname: String::from("https://api.deepseek.com"),
        model: String::from("deepseek-chat"),
        system_message: String::from("You are a friendly conversationalist."),
        static_dir: dir.path().display().to_string(),
    };

    let session = Session::builder(&config.api_hostname)
        .model(&config.model)
        .system_prompt(&config.system_message)
        .transport(Box::new(transport))
        .build(&StaticCredential::new("test-api-key"))
        .expect("Failed to build session");

    let app_state = AppState::new(session, config);
    (app(Arc::new(app_state)), dir)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
