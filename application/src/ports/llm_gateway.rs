//! LLM Gateway port
//!
//! Defines the interface for communicating with the generation service.

use async_trait::async_trait;
use council_domain::{ChatTurn, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::MissingCredentials(_))
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the
/// generation service. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Check that the gateway can issue calls at all (credentials present).
    ///
    /// Called once per aggregate request, before any persona call.
    fn ensure_configured(&self) -> Result<(), GatewayError> {
        Ok(())
    }

    /// Open a session on `model` seeded with prior turns
    async fn create_session(
        &self,
        model: &Model,
        history: Vec<ChatTurn>,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Turns the session was seeded with
    fn history(&self) -> &[ChatTurn];

    /// Send a user message and get the generated text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
