//! Advisor client port
//!
//! How the discussion orchestrator reaches the response aggregator: either
//! in-process or over HTTP.

use async_trait::async_trait;
use council_domain::{HistoryEntry, RoundResult};
use thiserror::Error;

/// Failure of a whole aggregate request (as opposed to a single persona)
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Aggregator not configured: {0}")]
    NotConfigured(String),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Source of persona replies for one round
#[async_trait]
pub trait AdvisorClient: Send + Sync {
    /// Ask every persona to answer `prompt` given the shared `history`.
    ///
    /// On success the result holds one reply per persona in roster order.
    async fn request_replies(
        &self,
        prompt: &str,
        history: Vec<HistoryEntry>,
    ) -> Result<RoundResult, ClientError>;
}
