//! Error types for the Gemini adapter

use council_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Empty response: {0}")]
    Empty(String),
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingApiKey => {
                GatewayError::MissingCredentials(GeminiError::MissingApiKey.to_string())
            }
            GeminiError::Client(err) => GatewayError::Other(err.to_string()),
            GeminiError::Http(err) if err.is_timeout() => GatewayError::Timeout,
            GeminiError::Http(err) if err.is_connect() => {
                GatewayError::ConnectionError(err.to_string())
            }
            GeminiError::Http(err) => GatewayError::RequestFailed(err.to_string()),
            GeminiError::Api { status, message } => GatewayError::ApiError { status, message },
            GeminiError::Parse(msg) | GeminiError::Empty(msg) => {
                GatewayError::MalformedResponse(msg)
            }
        }
    }
}
