//! A minimal fragment that injects borrowed text into the prompt.
//!
//! ```rust
//! use expert_types::fragments::StaticFragment;
//! use expert_core::generic::GenericRole;
//! use expert_core::template::IntoPrompt;
//!
//! let messages = StaticFragment::new("What is a pointer?", GenericRole::User).into_prompt();
//! assert_eq!(messages[0].text(), "What is a pointer?");
//! ```
//!
//! `From<&str>` defaults to [`GenericRole::System`].

use expert_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed string bundled with a chat role.
#[derive(Debug, Clone, Copy)]
pub struct StaticFragment<'a>((&'a str, GenericRole));

impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::System))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let (text, role) = self.0;
        vec![GenericMessage::new(text.to_owned(), role)]
    }
}
