//! Turning values into an ordered list of chat messages.
//!
//! ```rust
//! use expert_core::template::IntoPrompt;
//! use expert_core::generic::{GenericMessage, GenericRole};
//!
//! struct Greeting;
//!
//! impl IntoPrompt for Greeting {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! assert_eq!(Greeting.into_prompt().len(), 1);
//! ```

/// Converts a value into a series of chat messages.
///
/// The `Message` type is associated rather than fixed so a backend with a
/// richer wire format can still reuse the composition helpers.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] is a prompt of its own.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
