//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod aggregate_replies;
pub mod run_discussion;
