//! Persona roster

use super::entities::{Persona, PersonaId};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Ordered, immutable set of personas (Entity)
///
/// Built once at process start. Iteration order is configuration order,
/// which is also the order round results are reported and merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaRoster {
    personas: Vec<Persona>,
}

impl PersonaRoster {
    /// Build a roster, rejecting empty lists and duplicate identifiers
    pub fn new(personas: Vec<Persona>) -> Result<Self, DomainError> {
        if personas.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for persona in &personas {
            if !seen.insert(persona.id().clone()) {
                return Err(DomainError::DuplicatePersona(persona.id().to_string()));
            }
        }

        Ok(Self { personas })
    }

    /// The compiled-in three-member advisory board
    pub fn advisory_board() -> Self {
        Self {
            personas: super::board::advisory_board(),
        }
    }

    pub fn get(&self, id: &PersonaId) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id() == id)
    }

    /// Look up by raw identifier string (as received over the wire)
    pub fn find(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id().as_str() == id)
    }

    pub fn contains(&self, id: &PersonaId) -> bool {
        self.get(id).is_some()
    }

    /// Configuration-order position of a persona
    pub fn position(&self, id: &PersonaId) -> Option<usize> {
        self.personas.iter().position(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &PersonaId> {
        self.personas.iter().map(Persona::id)
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn as_slice(&self) -> &[Persona] {
        &self.personas
    }
}

impl Default for PersonaRoster {
    fn default() -> Self {
        Self::advisory_board()
    }
}

impl<'a> IntoIterator for &'a PersonaRoster {
    type Item = &'a Persona;
    type IntoIter = std::slice::Iter<'a, Persona>;

    fn into_iter(self) -> Self::IntoIter {
        self.personas.iter()
    }
}
