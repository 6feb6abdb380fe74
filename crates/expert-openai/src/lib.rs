//! OpenAI *chat/completions* backend for the `expert-*` workspace.
//!
//! [`OpenAiAdapter`] implements
//! [`expert_core::provider::ChatCompletionProvider`]; build one with
//! [`OpenAiAdapterBuilder`].
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::OpenAiClient;
pub use model_map::{GPT4_O, GPT4_O_MINI};
pub mod api_v1;
mod client;
pub mod error;
