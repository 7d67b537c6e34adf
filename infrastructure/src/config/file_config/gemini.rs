//! Generation service configuration (`[gemini]` section)

use council_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model every persona call uses
    pub model: String,
    /// API root; the public endpoint when unset
    pub base_url: Option<String>,
    /// API key (prefer the `GEMINI_API_KEY` environment variable, which wins)
    pub api_key: Option<String>,
    /// Per-request timeout; unset leaves calls unbounded
    pub request_timeout_secs: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: None,
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl FileGeminiConfig {
    pub fn model(&self) -> Model {
        Model::from(self.model.as_str())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
