//! Interactive discussion
//!
//! A readline front end over the discussion orchestrator.

mod command;
mod interrupt;
mod repl;
mod view;

pub use command::ReplCommand;
pub use interrupt::Interrupts;
pub use repl::ChatRepl;
pub use view::DiscussionView;
