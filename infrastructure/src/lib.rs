//! Infrastructure layer for advisor-council
//!
//! Adapters implementing the application ports: the Gemini gateway, the
//! HTTP advisor client, the JSONL conversation logger, and configuration
//! file loading.

pub mod config;
pub mod gemini;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use gemini::{GeminiError, GeminiLlmGateway, GeminiSession};
pub use http::HttpAdvisorClient;
pub use http::wire::{ChatRequest, ChatResponse, ErrorBody, WireError};
pub use logging::JsonlConversationLogger;
