//! Structured conversation logging.
//!
//! Provides [`JsonlConversationLogger`], a JSONL sink for the
//! [`ConversationLogger`](council_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
