//! Prompt domain
//!
//! Templates for the messages sent to personas.

mod template;

pub use template::PromptTemplate;
