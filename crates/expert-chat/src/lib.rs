//! # `expert-chat` – ask one expert persona one question
//!
//! | Crate              | What it provides                                                  |
//! |--------------------|-------------------------------------------------------------------|
//! | **`expert-core`**  | Provider-agnostic messages, provider trait, errors                |
//! | **`expert-prompt`**| `PromptChain` and the markdown `PromptBuilder`                    |
//! | **`expert-types`** | The four personas and `StaticFragment`                            |
//! | **`expert-openai`**| OpenAI chat-completions backend *(feature `openai`, default)*     |
//!
//! This crate adds the pieces that turn the stack into an application:
//!
//! * [`gateway::CompletionGateway`] – persona + text in, reply text out.
//! * [`submission::handle_submission`] – the per-submission event handler
//!   that validates input, builds a backend and classifies the outcome.
//! * [`render`] – markdown for the overview, answers and failures.
//!
//! ```rust,no_run
//! use expert_chat::{config::AppConfig, gateway::CompletionGateway, Persona};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = AppConfig::from_env().connect()?;
//!     let gateway = CompletionGateway::new(backend);
//!     let reply = gateway.complete(Persona::It, "What is a pointer?").await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/expert-chat/latest")]

#[cfg(feature = "openai")]
pub mod config;
pub mod error;
pub mod gateway;
pub mod render;
pub mod submission;

pub use expert_core::{ExpertClient, generic, model, provider, template};
pub use expert_prompt as prompt;
pub use expert_types as types;
pub use expert_types::Persona;

#[cfg(feature = "openai")]
pub use expert_openai as openai;
