//! The ordered message history of a conversation.
use crate::openai::{Message, Role};

pub const DEFAULT_SUMMARY_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";
pub const SUMMARY_PREFIX: &str = "Summary of the conversation so far: ";

/// Message history owned by a single session.
///
/// A system message, when present, is always the first element and
/// there is never more than one. Outside of `reset` and
/// `replace_with_summary` the transcript only grows.
#[derive(Default, Debug)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Start a transcript, seeded with a system message when the prompt
    /// is not blank.
    pub fn with_system_prompt(system_prompt: Option<&str>) -> Self {
        let mut transcript = Self::new();
        if let Some(prompt) = system_prompt.filter(|p| !p.trim().is_empty()) {
            transcript.0.push(Message::new(Role::System, prompt));
        }
        transcript
    }

    /// Owned copy of the history.
    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn push_user(&mut self, content: Option<&str>) {
        self.0.push(Message::from_optional(Role::User, content))
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.0.push(Message::new(Role::Assistant, content))
    }

    /// Drop everything except the system message, if there is one.
    pub fn reset(&mut self) {
        let system = self.0.iter().position(|m| m.role() == Role::System);
        match system {
            Some(idx) => {
                let msg = self.0.swap_remove(idx);
                self.0.clear();
                self.0.push(msg);
            }
            None => self.0.clear(),
        }
    }

    /// Replace the whole history with a system prompt and a summary of
    /// the conversation so far.
    pub fn replace_with_summary(&mut self, summary: Option<&str>, system_prompt: Option<&str>) {
        let system_prompt = system_prompt
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_SUMMARY_SYSTEM_MESSAGE);
        let summary = format!("{}{}", SUMMARY_PREFIX, summary.unwrap_or_default());

        self.0.clear();
        self.0.push(Message::new(Role::System, system_prompt));
        self.0.push(Message::new(Role::Assistant, &summary));
    }
}
