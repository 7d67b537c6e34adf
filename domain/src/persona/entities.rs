//! Persona entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stable identifier of a persona (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(String);

impl PersonaId {
    /// Create an identifier, rejecting blank strings
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidPersona(
                "persona id cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PersonaId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PersonaId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A configured persona (Entity)
///
/// Immutable once built. `instructions` is prepended to every request
/// made on behalf of this persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    id: PersonaId,
    name: String,
    title: String,
    instructions: String,
    avatar: String,
    image_url: Option<String>,
    color: String,
}

impl Persona {
    /// Build a persona; name and instructions must be non-blank.
    ///
    /// The avatar defaults to the initials of `name` and the colour to
    /// a neutral grey.
    pub fn new(
        id: PersonaId,
        name: impl Into<String>,
        title: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let instructions = instructions.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidPersona(format!(
                "persona '{}' has no display name",
                id
            )));
        }
        if instructions.trim().is_empty() {
            return Err(DomainError::InvalidPersona(format!(
                "persona '{}' has no instructions",
                id
            )));
        }

        let avatar = initials(&name);
        Ok(Self {
            id,
            name,
            title: title.into(),
            instructions,
            avatar,
            image_url: None,
            color: "#6B7280".to_string(),
        })
    }

    /// Build from the compiled-in table, which is known to be valid
    pub(super) fn builtin(
        id: &str,
        name: &str,
        title: &str,
        instructions: &str,
        avatar: &str,
        image_url: &str,
        color: &str,
    ) -> Self {
        Self {
            id: PersonaId(id.to_string()),
            name: name.to_string(),
            title: title.to_string(),
            instructions: instructions.to_string(),
            avatar: avatar.to_string(),
            image_url: Some(image_url.to_string()),
            color: color.to_string(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the accent colour (`#RRGGBB`); malformed values are rejected.
    pub fn with_color(mut self, color: impl Into<String>) -> Result<Self, DomainError> {
        let color = color.into();
        if parse_hex_color(&color).is_none() {
            return Err(DomainError::InvalidPersona(format!(
                "persona '{}' has invalid color '{}'",
                self.id, color
            )));
        }
        self.color = color;
        Ok(self)
    }

    pub fn id(&self) -> &PersonaId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Accent colour as an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.color).unwrap_or((0x6B, 0x72, 0x80))
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
