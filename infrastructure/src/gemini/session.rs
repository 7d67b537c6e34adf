//! Gemini chat session.
//!
//! A session is stateless on the wire: every [`send`](LlmSession::send)
//! posts the seeded history followed by the new user turn.

use super::error::{GeminiError, Result};
use super::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use council_application::ports::llm_gateway::{GatewayError, LlmSession};
use council_domain::core::string::preview;
use council_domain::{ChatTurn, Model};
use tracing::debug;

/// One persona conversation against a fixed model
pub struct GeminiSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: Model,
    history: Vec<ChatTurn>,
}

impl GeminiSession {
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: String,
        model: Model,
        history: Vec<ChatTurn>,
    ) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );
        Self {
            client,
            endpoint,
            api_key,
            model,
            history,
        }
    }

    /// Endpoint URL without the key
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn generate(&self, content: &str) -> Result<String> {
        let body = GenerateContentRequest::new(&self.history, content);
        debug!(
            "POST {} ({} history turns, {} chars)",
            self.endpoint,
            self.history.len(),
            content.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: preview(&text, 200),
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_slice(&bytes).map_err(|e| GeminiError::Parse(e.to_string()))?;

        parsed
            .text()
            .ok_or_else(|| GeminiError::Empty(parsed.empty_reason()))
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        Ok(self.generate(content).await?)
    }
}
