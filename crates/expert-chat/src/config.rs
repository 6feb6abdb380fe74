//! Where the OpenAI credential and endpoint come from.
use std::env;

use expert_core::error::Result;
use expert_openai::{OpenAiAdapter, OpenAiAdapterBuilder};

/// Connection settings for the completion backend.
///
/// Nothing is validated here; a missing key is reported by [`Self::connect`],
/// which runs once per submission.
#[derive(Clone, Default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AppConfig {
    /// Read `OPENAI_API_KEY` and `OPENAI_BASE_URL`.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
        }
    }

    /// Build the OpenAI backend from these settings.
    pub fn connect(&self) -> Result<OpenAiAdapter> {
        let mut builder = OpenAiAdapterBuilder::new();
        if let Some(api_key) = &self.api_key {
            builder = builder.with_api_key(api_key);
        }
        if let Some(base_url) = &self.base_url {
            builder = builder.with_base_url(base_url);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use expert_core::error::ExpertError;

    use super::*;

    #[test]
    fn connect_without_key_fails() {
        let err = AppConfig::default().connect().unwrap_err();
        assert!(matches!(err, ExpertError::Invalid(_)));
    }

    #[test]
    fn connect_uses_base_url() {
        let config = AppConfig {
            api_key: Some("sk-test".into()),
            base_url: Some("http://127.0.0.1:9/v1".into()),
        };
        assert_eq!(config.connect().unwrap().base_url(), "http://127.0.0.1:9/v1");
    }

    #[test]
    fn debug_hides_key() {
        let config = AppConfig {
            api_key: Some("sk-secret".into()),
            base_url: None,
        };
        assert!(!format!("{config:?}").contains("sk-secret"));
    }
}
