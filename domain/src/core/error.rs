//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Persona roster cannot be empty")]
    EmptyRoster,

    #[error("Duplicate persona id: {0}")]
    DuplicatePersona(String),

    #[error("Invalid persona: {0}")]
    InvalidPersona(String),

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl DomainError {
    /// Whether the error concerns roster configuration (as opposed to runtime data)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyRoster
                | DomainError::DuplicatePersona(_)
                | DomainError::InvalidPersona(_)
        )
    }
}
