//! What happens when the user presses "send".
//!
//! [`handle_submission`] is invoked once per submission. It rejects blank
//! input, builds a backend for this submission only, runs one exchange and
//! classifies the result so the display layer never has to deal with raw
//! errors.
use expert_core::{error::Result, generic::GenericMessage, provider::ChatCompletionProvider};
use expert_types::Persona;
use tracing::{info, warn};

use crate::{error::GatewayError, gateway::CompletionGateway};

/// Shown next to every failure.
pub const CREDENTIAL_HINT: &str = "APIキーが正しく設定されているか確認してください。";

/// The persona selection and the text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub persona: Persona,
    pub input: String,
}

impl Submission {
    pub fn new(persona: Persona, input: impl Into<String>) -> Self {
        Self {
            persona,
            input: input.into(),
        }
    }

    /// `true` when there is nothing but whitespace to send.
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Nothing was sent; the user has to type a question first.
    EmptyInput,
    Answered { persona: Persona, reply: String },
    Failed { persona: Persona, message: String },
}

impl SubmissionOutcome {
    /// Remediation hint to show with the outcome, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SubmissionOutcome::Failed { .. } => Some(CREDENTIAL_HINT),
            _ => None,
        }
    }
}

/// Handle one submission.
///
/// `connect` builds the backend and is only called for non-blank input, so a
/// missing credential shows up as [`SubmissionOutcome::Failed`] at the time
/// of the request instead of preventing startup.
pub async fn handle_submission<B, F>(submission: &Submission, connect: F) -> SubmissionOutcome
where
    F: FnOnce() -> Result<B>,
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    let persona = submission.persona;

    if submission.is_blank() {
        return SubmissionOutcome::EmptyInput;
    }

    let backend = match connect() {
        Ok(backend) => backend,
        Err(err) => {
            warn!(error = %err, "could not set up completion backend");
            return SubmissionOutcome::Failed {
                persona,
                message: GatewayError::from(err).to_string(),
            };
        }
    };

    let gateway = CompletionGateway::new(backend);
    match gateway.complete(persona, &submission.input).await {
        Ok(reply) => {
            info!(persona = persona.slug(), reply_chars = reply.chars().count(), "answered");
            SubmissionOutcome::Answered { persona, reply }
        }
        Err(err) => SubmissionOutcome::Failed {
            persona,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_input_is_blank() {
        assert!(Submission::new(Persona::It, " \n\t　").is_blank());
        assert!(!Submission::new(Persona::It, " x ").is_blank());
    }

    #[test]
    fn only_failures_carry_the_hint() {
        let failed = SubmissionOutcome::Failed {
            persona: Persona::It,
            message: "boom".into(),
        };
        assert_eq!(failed.hint(), Some(CREDENTIAL_HINT));
        assert_eq!(SubmissionOutcome::EmptyInput.hint(), None);
    }
}
