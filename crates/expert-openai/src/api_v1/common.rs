use expert_core::generic::GenericUsageReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct Usage {
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
    pub total_tokens: i32,
}

impl From<Usage> for GenericUsageReport {
    fn from(value: Usage) -> Self {
        GenericUsageReport {
            prompt_tokens: value.prompt_tokens.into(),
            completion_tokens: value.completion_tokens.into(),
            total_tokens: value.total_tokens.into(),
        }
    }
}

/// Envelope OpenAI wraps around every non-2xx reply:
/// `{"error": {"message": "...", "type": "...", "code": "..."}}`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiErrorResponse {
    /// Human-readable message for an error body, falling back to the raw text
    /// when it is not an OpenAI error envelope.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
            _ if body.trim().is_empty() => "empty error body".to_owned(),
            _ => body.trim().to_owned(),
        }
    }
}
