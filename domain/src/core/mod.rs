//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - generative model identifiers
//! - [`error::DomainError`] - domain-level errors
//! - [`string::preview`] - log-friendly text previews

pub mod error;
pub mod model;
pub mod string;
