//! Model value object representing a generative model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models a persona session can run on (Value Object)
///
/// Every persona in a round uses the same model; the identifier is passed
/// verbatim to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    Gemini20Flash,
    Gemini15Pro,
    Gemini15ProLatest,
    Gemini15Flash,
    Gemini15FlashLatest,
    GeminiPro,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini15ProLatest => "gemini-1.5-pro-latest",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15FlashLatest => "gemini-1.5-flash-latest",
            Model::GeminiPro => "gemini-pro",
            Model::Custom(s) => s,
        }
    }

    /// Models known to accept the `generateContent` call
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gemini20Flash,
            Model::Gemini15Pro,
            Model::Gemini15ProLatest,
            Model::Gemini15Flash,
            Model::Gemini15FlashLatest,
            Model::GeminiPro,
        ]
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-1.5-pro-latest" => Model::Gemini15ProLatest,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-flash-latest" => Model::Gemini15FlashLatest,
            "gemini-pro" => Model::GeminiPro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
