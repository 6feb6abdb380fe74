//! Helpers for composing prompts and markdown text.
//!
//! * [`chain::PromptChain`] lines up message fragments in order.
//! * [`builder::PromptBuilder`] assembles markdown without hand-written
//!   string juggling.
pub mod builder;
pub mod chain;
