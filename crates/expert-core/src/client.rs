//! Lightweight client bound to a single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so there is no
//! dynamic dispatch in user code and any provider crate that implements
//! [`ChatCompletionProvider`] plugs in unchanged.
use std::sync::Arc;

use crate::provider::{ChatCompleteParameters, ChatCompletionFuture, ChatCompletionProvider};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct ExpertClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for ExpertClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> ExpertClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChatCompletionProvider> ChatCompletionProvider for ExpertClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(&'p self, params: ChatCompleteParameters<M>) -> ChatCompletionFuture<'p>
    where
        M: Into<Self::Message> + Send + Sync + 'p,
    {
        self.backend.chat_complete(params)
    }
}
