//! Gemini generation service adapter
//!
//! Talks to the `generateContent` REST endpoint with `reqwest`. One
//! [`GeminiSession`] per persona call; the session carries the persona's
//! filtered history and sends it ahead of the new user turn.

mod error;
pub mod gateway;
pub mod session;
mod types;

pub use error::GeminiError;
pub use gateway::GeminiLlmGateway;
pub use session::GeminiSession;
