//! `AdvisorClient` over HTTP

use super::wire::{ChatRequest, ChatResponse, ErrorBody};
use async_trait::async_trait;
use council_application::ports::advisor_client::{AdvisorClient, ClientError};
use council_domain::{HistoryEntry, RoundResult};
use std::time::Duration;
use tracing::debug;

/// Requests rounds from a running chat server
pub struct HttpAdvisorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAdvisorClient {
    pub const CHAT_PATH: &'static str = "/api/chat";

    /// `server_url` is the server root, e.g. `http://127.0.0.1:3000`
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), Self::CHAT_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AdvisorClient for HttpAdvisorClient {
    async fn request_replies(
        &self,
        prompt: &str,
        history: Vec<HistoryEntry>,
    ) -> Result<RoundResult, ClientError> {
        let body = ChatRequest::new(prompt, &history);
        debug!(
            "POST {} ({} history entries)",
            self.endpoint,
            body.conversation_history.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|b| b.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<ChatResponse>(&bytes)
            .map(ChatResponse::into_round)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}
