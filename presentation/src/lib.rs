//! Presentation layer for advisor-council
//!
//! This crate contains the HTTP server, CLI definitions, console output,
//! progress reporters, and the interactive discussion REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use chat::{ChatRepl, DiscussionView};
pub use cli::commands::{AskArgs, ChatArgs, Cli, Command, OutputFormat, ServeArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{ServerError, ServerState};
