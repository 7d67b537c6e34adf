//! Persona domain
//!
//! A [`Persona`] is one configured identity with a fixed instruction block.
//! The [`PersonaRoster`] is the immutable, ordered set of personas that every
//! round fans out to; its order is the canonical order for round results.

mod board;
pub mod entities;
pub mod roster;

pub use entities::{Persona, PersonaId};
pub use roster::PersonaRoster;
