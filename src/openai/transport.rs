use std::time::Duration;

use async_trait::async_trait;

use super::core::ChatCompletionRequest;
use crate::core::Credential;
use crate::error::{ChatError, Result};

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Delivers a chat completion request and hands back the raw response
/// body. Parsing is left to the caller.
#[async_trait]
pub trait Transport {
    async fn send(
        &self,
        endpoint: &str,
        payload: &ChatCompletionRequest<'_>,
        credential: &Credential,
    ) -> Result<String>;
}

pub type BoxedTransport = Box<dyn Transport + Send + Sync + 'static>;

/// Build the chat completion URL for an OpenAI compatible host.
pub fn completions_url(api_hostname: &str) -> String {
    format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"))
}

/// Sends requests over HTTP with fixed connect and read timeouts.
///
/// Idle connections are not pooled, so the connection opened for a
/// call is closed once the response has been read or dropped.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeouts(CONNECT_TIMEOUT, READ_TIMEOUT)
    }

    pub(crate) fn with_timeouts(connect: Duration, read: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect)
            .read_timeout(read)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        endpoint: &str,
        payload: &ChatCompletionRequest<'_>,
        credential: &Credential,
    ) -> Result<String> {
        let response = self
            .client
            .post(endpoint)
            .bearer_auth(credential.expose())
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is reported the same as no body
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            return Err(ChatError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
