//! Raw TOML configuration data types
//!
//! These structs mirror the config file. Conversion into domain and
//! application types happens here so callers never see raw strings.

mod discussion;
mod gemini;
mod logging;
mod personas;
mod server;

pub use discussion::FileDiscussionConfig;
pub use gemini::FileGeminiConfig;
pub use logging::FileLoggingConfig;
pub use personas::FilePersonaConfig;
pub use server::FileServerConfig;

use super::ConfigError;
use council_domain::{PersonaRoster, core::string::preview};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub gemini: FileGeminiConfig,
    pub discussion: FileDiscussionConfig,
    pub logging: FileLoggingConfig,
    /// Replaces the built-in advisory board when non-empty
    pub personas: Vec<FilePersonaConfig>,
}

impl FileConfig {
    /// The roster this process serves, validated
    pub fn roster(&self) -> Result<PersonaRoster, ConfigError> {
        if self.personas.is_empty() {
            return Ok(PersonaRoster::advisory_board());
        }
        let personas = self
            .personas
            .iter()
            .map(FilePersonaConfig::to_persona)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PersonaRoster::new(personas)?)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gemini.model",
                message: "model name cannot be empty".to_string(),
            });
        }
        if self.gemini.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "gemini.request_timeout_secs",
                message: "timeout cannot be 0 (omit it for no timeout)".to_string(),
            });
        }
        if self.discussion.context_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "discussion.context_window",
                message: "must be at least 1".to_string(),
            });
        }
        self.roster()?;
        Ok(())
    }

    /// Effective values with the API key masked, for `--show-config`
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if let Some(key) = config.gemini.api_key.as_mut() {
            *key = format!("{}***", preview(key, 4).trim_end_matches('…'));
        }
        config
    }
}
