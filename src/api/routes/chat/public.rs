//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::openai::Message;

/// Returned in place of a reply whenever a chat turn fails.
pub const FALLBACK_REPLY: &str = "Leave me alone.";

#[derive(Serialize, Deserialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Message>,
}

#[derive(Deserialize, Serialize)]
pub struct SummaryRequest {
    pub summary: Option<String>,
    pub system_prompt: Option<String>,
}
