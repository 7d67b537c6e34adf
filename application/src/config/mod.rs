//! Application-level configuration.
//!
//! - [`DiscussionParams`] - pacing and sizing of the discussion loop

pub mod discussion_params;

pub use discussion_params::DiscussionParams;
