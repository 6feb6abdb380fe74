use expert_core::error::ExpertError;
use expert_types::UnknownPersona;

/// The two ways an exchange can fail.
///
/// Every remote failure (credential, network, rejected request, unusable
/// reply) collapses into [`GatewayError::CompletionFailed`]; the message is
/// meant for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("unknown persona `{0}`")]
    UnknownPersona(String),

    #[error("{0}")]
    CompletionFailed(String),
}

impl From<UnknownPersona> for GatewayError {
    fn from(value: UnknownPersona) -> Self {
        GatewayError::UnknownPersona(value.0)
    }
}

impl From<ExpertError> for GatewayError {
    fn from(value: ExpertError) -> Self {
        GatewayError::CompletionFailed(value.to_string())
    }
}
