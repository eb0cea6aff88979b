//! End to end tests of a session talking HTTP to a mock endpoint

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;
    use serial_test::serial;

    use victoria::ChatError;
    use victoria::ai::chat::Session;
    use victoria::core::{EnvCredential, StaticCredential};
    use victoria::openai::{Message, Role};

    #[tokio::test]
    async fn it_chats_over_http() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::Json(json!({
                "model": "deepseek-chat",
                "messages": [
                    {"role": "system", "content": "You are a friendly conversationalist."},
                    {"role": "user", "content": "Hello"}
                ],
                "stream": false
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "chatcmpl-123",
                    "object": "chat.completion",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "Hi there!"},
                        "finish_reason": "stop"
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let mut session = Session::builder(&server.url())
            .system_prompt("You are a friendly conversationalist.")
            .build(&StaticCredential::new("test-key"))
            .unwrap();

        let reply = session.chat("Hello").await.unwrap();

        mock.assert_async().await;
        assert_eq!(reply, "Hi there!");
        assert_eq!(session.history_snapshot().len(), 3);
    }

    #[tokio::test]
    async fn it_reports_http_status_and_keeps_orphan() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let mut session = Session::builder(&server.url())
            .model("deepseek-reasoner")
            .build(&StaticCredential::new("test-key"))
            .unwrap();

        let result = session.chat("too fast").await;

        mock.assert_async().await;
        match result {
            Err(ChatError::HttpStatus { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body.as_deref(), Some("rate limited"));
            }
            other => panic!("Expected HTTP status error, got {:?}", other),
        }
        assert_eq!(
            session.history_snapshot(),
            vec![Message::new(Role::User, "too fast")]
        );
    }

    #[tokio::test]
    async fn it_reports_unparseable_reply() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let mut session = Session::builder(&server.url())
            .build(&StaticCredential::new("test-key"))
            .unwrap();

        let result = session.chat("x").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ChatError::Parse(_))));
        assert_eq!(
            session.history_snapshot().last(),
            Some(&Message::new(Role::User, "x"))
        );
    }

    #[test]
    #[serial]
    fn it_requires_a_credential_from_the_environment() {
        let var = "VICTORIA_TEST_MISSING_KEY";
        unsafe { std::env::remove_var(var) };

        let result = Session::builder("https://api.deepseek.com").build(&EnvCredential::new(var));
        assert!(matches!(result, Err(ChatError::Configuration(_))));

        unsafe { std::env::set_var(var, "") };
        let result = Session::builder("https://api.deepseek.com").build(&EnvCredential::new(var));
        assert!(matches!(result, Err(ChatError::Configuration(_))));

        unsafe { std::env::remove_var(var) };
    }
}
