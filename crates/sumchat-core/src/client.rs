//! Backend transport for the chat widget.
//!
//! The controller only sees [`ChatBackend`]; [`HttpBackend`] is the
//! production implementation. In the browser `reqwest` runs on top of
//! `fetch`, so futures here are not `Send`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::wire::{ErrorBody, MessageReply, MessageRequest, StatsReply};

/// The two backend endpoints the widget talks to.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// Relay one user message and return the decoded reply.
    ///
    /// Non-2xx statuses are errors, whatever the body says.
    async fn post_message(&self, message: &str) -> ClientResult<MessageReply>;

    /// Fetch the savings statistics accumulated so far.
    async fn fetch_stats(&self) -> ClientResult<StatsReply>;
}

/// JSON-over-HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    /// Create a backend with a fresh HTTP client.
    ///
    /// No request timeout is set; the transport's defaults apply.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a backend sharing an existing HTTP client.
    pub fn with_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn post_message(&self, message: &str) -> ClientResult<MessageReply> {
        let url = self.config.message_url();
        tracing::debug!("POST {} ({} chars)", url, message.chars().count());

        let response = self
            .http
            .post(&url)
            .json(&MessageRequest::new(message))
            .send()
            .await?;

        decode_json(response).await
    }

    async fn fetch_stats(&self) -> ClientResult<StatsReply> {
        let url = self.config.stats_url();
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        decode_json(response).await
    }
}

/// Turn a response into `T`, treating every non-2xx status as a failure.
async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();

    if !status.is_success() {
        // The body is only used for its optional `error` string.
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            detail: ErrorBody::detail_from(&body),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}
