//! Persona + user text in, reply text out.
//!
//! Each call is one stateless round-trip: the gateway builds the two-message
//! exchange (persona system prompt, then the user text verbatim), sends it
//! once with deterministic sampling and hands back the reply unmodified.
//! Nothing is retried and nothing is remembered between calls.
use expert_core::{
    ExpertClient,
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use expert_prompt::chain::PromptChain;
use expert_types::{Persona, fragments::StaticFragment};
use tracing::{debug, warn};

use crate::error::GatewayError;

/// Model every exchange is sent to.
pub const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);

/// Sampling temperature; `0` asks for the single most likely completion.
pub const TEMPERATURE: f64 = 0.0;

/// One persona plus the text to forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub persona: Persona,
    pub user_text: String,
}

impl ExchangeRequest {
    pub fn new(persona: Persona, user_text: impl Into<String>) -> Self {
        Self {
            persona,
            user_text: user_text.into(),
        }
    }

    /// Resolve `identifier` (label or slug) into a request.
    pub fn from_identifier(
        identifier: &str,
        user_text: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        Ok(Self::new(identifier.parse()?, user_text))
    }

    /// `[system(persona prompt), user(user_text)]`, in that order.
    pub fn messages(&self) -> Vec<GenericMessage> {
        PromptChain::new()
            .with(self.persona)
            .with(StaticFragment::new(&self.user_text, GenericRole::User))
            .build()
    }
}

/// Sends exchanges to a single backend.
#[derive(Debug, Clone)]
pub struct CompletionGateway<B> {
    client: ExpertClient<B>,
}

impl<B> CompletionGateway<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self {
            client: ExpertClient::new(backend),
        }
    }

    pub fn backend(&self) -> &B {
        self.client.backend()
    }

    /// Ask `persona` about `user_text`.
    ///
    /// Callers are expected to reject blank input first; blank text is still
    /// forwarded as-is if it gets here.
    pub async fn complete(&self, persona: Persona, user_text: &str) -> Result<String, GatewayError> {
        self.exchange(&ExchangeRequest::new(persona, user_text)).await
    }

    /// Like [`Self::complete`], with the persona given by label or slug.
    ///
    /// # Errors
    ///
    /// [`GatewayError::UnknownPersona`] before anything is sent if
    /// `identifier` names no persona.
    pub async fn complete_by_identifier(
        &self,
        identifier: &str,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        let request = ExchangeRequest::from_identifier(identifier, user_text)?;
        self.exchange(&request).await
    }

    pub async fn exchange(&self, request: &ExchangeRequest) -> Result<String, GatewayError> {
        let params =
            ChatCompleteParameters::new(request.messages(), MODEL).with_temperature(TEMPERATURE);

        debug!(persona = request.persona.slug(), model = ?MODEL, "requesting completion");

        let response = self.client.chat_complete(params).await.map_err(|err| {
            warn!(persona = request.persona.slug(), error = %err, "completion failed");
            GatewayError::from(err)
        })?;

        match response.content.content {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(GatewayError::CompletionFailed(
                "the model returned an empty reply".to_owned(),
            )),
        }
    }
}
