use expert_core::error::ExpertError;
use reqwest::StatusCode;

/// Every failure mode the OpenAI client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for ExpertError {
    fn from(value: OpenAiError) -> Self {
        ExpertError::Backend(Box::new(value))
    }
}
