use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChatError, Result};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// One utterance in a conversation. Content is never null, a missing
/// value is stored as an empty string.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }

    /// Build a message from optional content, normalizing `None` to
    /// empty text.
    pub fn from_optional(role: Role, content: Option<&str>) -> Self {
        Self::new(role, content.unwrap_or_default())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The request body sent to a chat completion endpoint.
///
/// Mirrors the history it was built from element for element. No
/// truncation, filtering or reordering happens here.
#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub stream: bool,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn build(history: &'a [Message], model: &'a str) -> Self {
        Self {
            model,
            messages: history,
            stream: false,
        }
    }
}

// {
//     "id": "chatcmpl-123",
//     "choices": [{
//         "index": 0,
//         "message": {"role": "assistant", "content": "Hello!"},
//         "finish_reason": "stop"
//     }]
// }
/// Pull the assistant's reply out of a chat completion response body.
pub fn parse_completion(body: &str) -> Result<String> {
    let resp: Value = serde_json::from_str(body)
        .map_err(|e| ChatError::Parse(format!("Response is not valid JSON: {}", e)))?;

    let choice = resp["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .ok_or_else(|| ChatError::Parse(format!("No choices in response: {}", resp)))?;

    choice["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| ChatError::Parse(format!("No message received. Resp: {}", resp)))
}
