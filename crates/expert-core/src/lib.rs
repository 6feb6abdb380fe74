//! Provider-agnostic building blocks shared by every `expert-*` crate.
//!
//! * [`generic`] – chat messages and roles independent of any vendor API.
//! * [`model`] – logical model identifiers.
//! * [`provider`] – the [`provider::ChatCompletionProvider`] seam a backend
//!   implements.
//! * [`template`] – [`template::IntoPrompt`], turning values into messages.
//! * [`client`] – [`ExpertClient`], a thin wrapper bound to one backend.
//! * [`error`] – the unified [`error::ExpertError`].
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::ExpertClient;
