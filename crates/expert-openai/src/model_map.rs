use std::borrow::Cow;

use expert_core::model::{Model, OpenAiModel};

pub const GPT4_O_MINI: &str = "gpt-4o-mini";
pub const GPT4_O: &str = "gpt-4o";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(Cow::Borrowed(*custom)),
        Model::OpenAi(OpenAiModel::Gpt4o) => Some(GPT4_O.into()),
        Model::OpenAi(OpenAiModel::Gpt4oMini) => Some(GPT4_O_MINI.into()),
    }
}
