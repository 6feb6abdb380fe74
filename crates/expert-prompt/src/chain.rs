//! Concatenates values implementing
//! [`IntoPrompt`](expert_core::template::IntoPrompt) into one message list.
//!
//! ```text
//! ┌───────────────┐    IntoPrompt     ┌────────────────┐
//! │ Persona       │ ─────────────────►│ Vec<Message>   │
//! ├───────────────┤                   ├────────────────┤
//! │ StaticFragment│ ─────────────────►│ Vec<Message>   │
//! └───────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! Fragments are appended in call order, so the chain is also the place
//! where message ordering (system first, user last) is decided.
use expert_core::template::IntoPrompt;

/// Accumulates messages produced by [`IntoPrompt`] implementors.
///
/// The only way to obtain the result is [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    ///
    /// ```rust
    /// # use expert_prompt::chain::PromptChain;
    /// # use expert_core::generic::{GenericMessage, GenericRole};
    /// #
    /// # let msg = GenericMessage::new("hi".into(), GenericRole::User);
    /// let vec = PromptChain::new()
    ///     .with(msg)
    ///     .build();
    /// assert_eq!(vec.len(), 1);
    /// ```
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
