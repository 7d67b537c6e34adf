//! Gemini LLM Gateway implementation

use super::error::GeminiError;
use super::session::GeminiSession;
use async_trait::async_trait;
use council_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use council_domain::{ChatTurn, Model};
use std::time::Duration;
use tracing::info;

/// LLM Gateway for the Gemini `generateContent` API
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiLlmGateway {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    /// Environment variable holding the API key
    pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";

    /// Create a gateway; a missing key is only reported when a call is made.
    ///
    /// `timeout` bounds each whole request. `None` leaves calls unbounded.
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(GeminiError::Client)?;

        let api_key = api_key.filter(|k| !k.trim().is_empty());
        let base_url = base_url.unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        info!(
            "GeminiLlmGateway initialized (base URL {}, key {})",
            base_url,
            if api_key.is_some() { "present" } else { "missing" }
        );

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Gateway keyed from `GEMINI_API_KEY`, falling back to `configured_key`
    pub fn from_env(
        configured_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let key = std::env::var(Self::API_KEY_ENV).ok().or(configured_key);
        Self::new(key, base_url, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, GeminiError> {
        self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    fn ensure_configured(&self) -> Result<(), GatewayError> {
        self.api_key()?;
        Ok(())
    }

    async fn create_session(
        &self,
        model: &Model,
        history: Vec<ChatTurn>,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self.api_key()?.to_string();
        Ok(Box::new(GeminiSession::new(
            self.client.clone(),
            &self.base_url,
            api_key,
            model.clone(),
            history,
        )))
    }
}
