//! Persona registry and reusable prompt fragments.
pub mod fragments;
pub mod persona;

pub use persona::{Persona, PersonaDefinition, UnknownPersona, lookup};
