//! Configuration file loading for advisor-council
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. Global: `$XDG_CONFIG_HOME/advisor-council/config.toml`
//! 3. Project: `./council.toml` or `./.council.toml`
//! 4. `--config <path>`
//! 5. Environment: `COUNCIL_SECTION__KEY=value`
//!
//! Command line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDiscussionConfig, FileGeminiConfig, FileLoggingConfig, FilePersonaConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;

use council_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or interpreting configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid persona roster: {0}")]
    Roster(#[from] DomainError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}
