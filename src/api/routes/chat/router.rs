//! Router for the chat API

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use super::public::{self, FALLBACK_REPLY};
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Send the raw request body to the session as the user's question and
/// answer with the reply. Failures are logged and replaced with a fixed
/// fallback so the client always gets some text back. Invalid UTF-8 in
/// the body is replaced rather than rejected.
async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> impl IntoResponse {
    let question = String::from_utf8_lossy(&body);
    let reply = {
        let mut session = state.session.lock().await;
        match session.chat(&question).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(timeout = e.is_timeout(), "Chat handler error: {}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    };

    ([(header::CONTENT_TYPE, "application/json")], reply)
}

/// Get the transcript of the current conversation
async fn chat_history(State(state): State<SharedState>) -> Json<public::ChatTranscriptResponse> {
    let transcript = state.session.lock().await.history_snapshot();
    Json(public::ChatTranscriptResponse { transcript })
}

/// Start over, keeping only the system prompt
async fn chat_reset(State(state): State<SharedState>) -> StatusCode {
    state.session.lock().await.reset();
    StatusCode::NO_CONTENT
}

/// Compact the conversation into a summary
async fn chat_summary(
    State(state): State<SharedState>,
    Json(payload): Json<public::SummaryRequest>,
) -> StatusCode {
    state
        .session
        .lock()
        .await
        .replace_with_summary(payload.summary.as_deref(), payload.system_prompt.as_deref());
    StatusCode::NO_CONTENT
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/chat/history", get(chat_history))
        .route("/chat/reset", post(chat_reset))
        .route("/chat/summary", post(chat_summary))
}
