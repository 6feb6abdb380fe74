use std::sync::Arc;

use expert_core::{
    error::Result,
    generic::GenericChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionFuture, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter, OpenAiClient,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        let request = match ChatCompletionRequest::try_from(params) {
            Ok(request) => request,
            Err(err) => {
                return Box::pin(std::future::ready(Err::<GenericChatCompletionResponse, _>(err)));
            }
        };

        Box::pin(complete(Arc::clone(&self.client), request))
    }
}

async fn complete(
    client: Arc<OpenAiClient>,
    request: ChatCompletionRequest,
) -> Result<GenericChatCompletionResponse> {
    let mut response = client.chat_completion(request).await?;

    #[cfg(feature = "tracing")]
    log_usage(&response);

    let usage = response.usage.map(Into::into);

    if response.choices.is_empty() {
        return Err(OpenAiError::Format("response has no choices".into()).into());
    }
    let first_choice = response.choices.swap_remove(0);

    match first_choice.finish_reason {
        None | Some(FinishReason::Stop) => {}
        Some(FinishReason::Length) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("completion was cut off at the token limit");
        }
        Some(other) => {
            return Err(
                OpenAiError::Format(format!("unhandled finish reason on API: {other:?}")).into(),
            );
        }
    }

    let message = first_choice.message;
    if message.content.is_none() {
        let reason = message
            .refusal
            .map(|refusal| format!("model refused to answer: {refusal}"))
            .unwrap_or_else(|| "response message has no content".to_owned());
        return Err(OpenAiError::Format(reason).into());
    }

    Ok(GenericChatCompletionResponse {
        content: message.into(),
        usage,
    })
}

#[cfg(feature = "tracing")]
fn log_usage(response: &crate::api_v1::ChatCompletionResponse) {
    if let Some(usage) = &response.usage {
        tracing::debug!(
            model = %response.model,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "chat completion finished"
        );
    }
}
