//! Model identifiers used throughout the workspace.
//!
//! Application code picks an enum variant and the provider crate translates it
//! into its own naming scheme (`"gpt-4o-mini"` and friends).
//!
//! ```rust
//! use expert_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! ```

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – models the OpenAI backend knows by name.
/// * `Custom` – any raw model name, passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
    Custom(&'static str),
}

/// Models supported by the OpenAI backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4o,
    Gpt4oMini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
