use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericChatCompletionResponse, model::Model};

/// Boxed future returned by [`ChatCompletionProvider::chat_complete`].
pub type ChatCompletionFuture<'p> =
    Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>;

/// A **backend** turns a list of chat messages into a network call to a
/// concrete provider and parses the reply.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip.
///
/// The method returns a boxed future so the trait needs no `async_trait`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Send `params` to the provider and return its first reply.
    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Send + Sync + 'p;
}

/// Everything a backend needs for one completion call.
#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
}

impl<M> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
        }
    }

    pub fn messages(&self) -> &[M] {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpenAiModel;

    #[test]
    fn temperature_is_unset_by_default() {
        let params = ChatCompleteParameters::new(vec!["hi"], Model::OpenAi(OpenAiModel::Gpt4oMini));
        assert_eq!(params.temperature(), None);
        assert_eq!(params.with_temperature(0.0).temperature(), Some(0.0));
    }
}
