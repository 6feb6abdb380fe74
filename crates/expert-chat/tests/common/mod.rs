#![allow(dead_code)]

use std::{io, sync::Mutex};

use expert_core::{
    error::ExpertError,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionFuture, ChatCompletionProvider},
};

/// What a stub backend saw for one call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<GenericMessage>,
    pub model: Model,
    pub temperature: Option<f64>,
}

/// Replies with every received message rendered as `role: text`, one per
/// line, and records each call.
#[derive(Default)]
pub struct EchoBackend {
    calls: Mutex<Vec<RecordedCall>>,
}

impl EchoBackend {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn echo(messages: &[GenericMessage]) -> String {
        messages
            .iter()
            .map(|m| format!("{}: {}", m.role, m.text()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ChatCompletionProvider for EchoBackend {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let model = params.model();
        let temperature = params.temperature();
        let messages: Vec<GenericMessage> =
            params.into_messages().into_iter().map(Into::into).collect();

        let reply = Self::echo(&messages);
        self.calls.lock().unwrap().push(RecordedCall {
            messages,
            model,
            temperature,
        });

        Box::pin(async move {
            Ok::<_, ExpertError>(GenericChatCompletionResponse {
                content: GenericMessage::new(reply, GenericRole::Assistant),
                usage: None,
            })
        })
    }
}

/// Rejects every call the way a provider rejects a bad credential.
pub struct UnauthorizedBackend;

impl ChatCompletionProvider for UnauthorizedBackend {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(&'p self, _params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        Box::pin(async {
            Err::<GenericChatCompletionResponse, _>(ExpertError::Backend(Box::new(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "401 Unauthorized: Incorrect API key provided",
            ))))
        })
    }
}

/// Answers with a message that has no text.
pub struct SilentBackend;

impl ChatCompletionProvider for SilentBackend {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(&'p self, _params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        Box::pin(async {
            Ok::<_, ExpertError>(GenericChatCompletionResponse {
                content: GenericMessage {
                    content: None,
                    role: GenericRole::Assistant,
                    name: None,
                },
                usage: None,
            })
        })
    }
}
