//! Generative backend implementations.
//!
//! [`create_backend`] builds the configured backend as a
//! [`BoxGenerativeBackend`] ready to hand to a `ChatRelay`.

pub mod gemini;

use secrecy::SecretString;

use tripchat_core::llm::box_backend::BoxGenerativeBackend;
use tripchat_types::config::ModelConfig;
use tripchat_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Create the Gemini backend for `config`.
///
/// # Errors
///
/// `AuthenticationFailed` when no (or a blank) API key was supplied.
pub fn create_backend(
    config: &ModelConfig,
    api_key: Option<&str>,
) -> Result<BoxGenerativeBackend, LlmError> {
    let key = api_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(LlmError::AuthenticationFailed)?;

    let mut provider = GeminiProvider::new(SecretString::from(key.to_string()));
    if let Some(base_url) = config.base_url.as_deref() {
        provider = provider.with_base_url(base_url);
    }
    Ok(BoxGenerativeBackend::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_backend_requires_key() {
        let config = ModelConfig::default();
        assert!(matches!(create_backend(&config, None), Err(LlmError::AuthenticationFailed)));
        assert!(matches!(create_backend(&config, Some("  ")), Err(LlmError::AuthenticationFailed)));
    }

    #[test]
    fn test_create_backend_with_key() {
        let config = ModelConfig {
            base_url: Some("http://localhost:9999".to_string()),
            ..ModelConfig::default()
        };
        let backend = create_backend(&config, Some("k")).unwrap();
        assert_eq!(backend.name(), "gemini");
    }
}
