//! Application layer for advisor-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DiscussionParams;
pub use ports::{
    advisor_client::{AdvisorClient, ClientError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{DiscussionProgress, NoDiscussionProgress, NoProgress, ProgressNotifier},
};
pub use use_cases::aggregate_replies::{AggregateError, AggregateInput, AggregateRepliesUseCase};
pub use use_cases::run_discussion::{
    CycleEnd, CycleSummary, DiscussionError, DiscussionOrchestrator, RoundOutcome,
};
