use crate::core::{Credential, CredentialProvider, DEFAULT_MODEL};
use crate::error::{ChatError, Result};
use crate::openai::{
    BoxedTransport, ChatCompletionRequest, HttpTransport, Message, completions_url,
    parse_completion,
};
use super::models::Transcript;

/// A stateful conversation with an LLM using an OpenAI compatible chat
/// completion API.
///
/// Every turn sends the full transcript. The user's message is recorded
/// before the request goes out, so a failed turn leaves it in the
/// transcript without a reply.
///
/// A `Session` is not synchronized. `chat` takes `&mut self`; owners
/// sharing one across tasks need to put it behind a mutex.
///
/// Use `Session::builder()` to construct a valid `Session`.
pub struct Session {
    endpoint: String,
    credential: Credential,
    model: String,
    transport: BoxedTransport,
    transcript: Transcript,
}

impl Session {
    pub fn builder(api_hostname: &str) -> SessionBuilder {
        SessionBuilder::new(api_hostname)
    }

    /// Send the next user message and record the assistant's reply.
    pub async fn chat(&mut self, user_msg: &str) -> Result<String> {
        self.transcript.push_user(Some(user_msg));

        tracing::debug!(
            model = %self.model,
            history_len = self.transcript.len(),
            "Sending chat completion request"
        );

        let payload = ChatCompletionRequest::build(self.transcript.as_slice(), &self.model);
        let body = self
            .transport
            .send(&self.endpoint, &payload, &self.credential)
            .await?;
        let reply = parse_completion(&body)?;

        self.transcript.push_assistant(&reply);
        Ok(reply)
    }

    /// Clear the conversation but keep the system prompt (if present).
    pub fn reset(&mut self) {
        self.transcript.reset();
    }

    /// Replace a long history with a summary to save tokens. The summary
    /// is usually produced by asking the model beforehand.
    pub fn replace_with_summary(&mut self, summary: Option<&str>, system_prompt: Option<&str>) {
        self.transcript.replace_with_summary(summary, system_prompt);
    }

    /// Copy of the current history.
    pub fn history_snapshot(&self) -> Vec<Message> {
        self.transcript.messages()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Switch to another model. Blank values are ignored.
    pub fn set_model(&mut self, model: &str) {
        if !model.trim().is_empty() {
            self.model = model.to_string();
        }
    }
}

pub struct SessionBuilder {
    api_hostname: String,
    model: String,
    system_prompt: Option<String>,
    transport: Option<BoxedTransport>,
}

impl SessionBuilder {
    pub fn new(api_hostname: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            transport: None,
        }
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn system_prompt(mut self, system_prompt: &str) -> Self {
        self.system_prompt = Some(system_prompt.to_string());
        self
    }

    /// Use a custom transport instead of HTTP
    pub fn transport(mut self, transport: BoxedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolve the credential and build the session. Fails if the
    /// provider has no credential or only a blank one.
    pub fn build(self, credentials: &dyn CredentialProvider) -> Result<Session> {
        let credential = credentials
            .credential()
            .filter(|c| !c.expose().trim().is_empty())
            .ok_or_else(|| {
                ChatError::Configuration(format!("Missing API key in {}", credentials.source()))
            })?;

        let transport: BoxedTransport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new()?),
        };

        Ok(Session {
            endpoint: completions_url(&self.api_hostname),
            credential,
            model: self.model,
            transport,
            transcript: Transcript::with_system_prompt(self.system_prompt.as_deref()),
        })
    }
}
