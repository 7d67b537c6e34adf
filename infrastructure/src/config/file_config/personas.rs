//! Roster override (`[[personas]]` tables)

use council_domain::{DomainError, Persona, PersonaId};
use serde::{Deserialize, Serialize};

/// One persona as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePersonaConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub instructions: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl FilePersonaConfig {
    pub fn to_persona(&self) -> Result<Persona, DomainError> {
        let mut persona = Persona::new(
            PersonaId::new(self.id.as_str())?,
            self.name.as_str(),
            self.title.as_str(),
            self.instructions.as_str(),
        )?;
        if let Some(avatar) = self.avatar.as_deref().filter(|a| !a.trim().is_empty()) {
            persona = persona.with_avatar(avatar);
        }
        if let Some(url) = self.image_url.as_deref().filter(|u| !u.trim().is_empty()) {
            persona = persona.with_image_url(url);
        }
        if let Some(color) = self.color.as_deref() {
            persona = persona.with_color(color)?;
        }
        Ok(persona)
    }
}
