//! ChatRelay -- the server side of the chat exchange.
//!
//! Forwards the caller's turns to the generative backend together with a
//! fixed system instruction and sampling temperature, and hands back the
//! reply text. Holds no per-conversation state.

use tracing::{debug, info};

use tripchat_types::chat::ConversationTurn;
use tripchat_types::config::ModelConfig;
use tripchat_types::error::RelayError;
use tripchat_types::llm::{GenerationRequest, LlmError};

use crate::llm::box_backend::BoxGenerativeBackend;

use super::collaborator::ChatCollaborator;

/// Fixed parameters applied to every relayed conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaySettings {
    pub model: String,
    pub temperature: f64,
    pub system_instruction: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self::from(&ModelConfig::default())
    }
}

impl From<&ModelConfig> for RelaySettings {
    fn from(config: &ModelConfig) -> Self {
        Self {
            model: config.name.clone(),
            temperature: config.temperature,
            system_instruction: config.system_instruction.clone(),
        }
    }
}

/// Relays conversations to a generative backend.
pub struct ChatRelay {
    backend: BoxGenerativeBackend,
    settings: RelaySettings,
}

impl ChatRelay {
    pub fn new(backend: BoxGenerativeBackend, settings: RelaySettings) -> Self {
        Self { backend, settings }
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Build the backend request for a conversation.
    pub fn build_request(&self, turns: Vec<ConversationTurn>) -> GenerationRequest {
        GenerationRequest {
            model: self.settings.model.clone(),
            contents: turns,
            system_instruction: Some(self.settings.system_instruction.clone()),
            temperature: Some(self.settings.temperature),
        }
    }

    /// Forward the turns and return the reply text, or `""` when the backend
    /// produced none.
    pub async fn relay(&self, turns: Vec<ConversationTurn>) -> Result<String, LlmError> {
        let request = self.build_request(turns);
        debug!(
            backend = self.backend.name(),
            model = %request.model,
            turns = request.contents.len(),
            "Relaying conversation"
        );

        let response = self.backend.generate(&request).await?;
        info!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            "Backend replied"
        );
        Ok(response.text.unwrap_or_default())
    }
}

/// In-process collaborator: lets a controller talk to the backend without
/// the HTTP hop.
impl ChatCollaborator for ChatRelay {
    fn name(&self) -> &str {
        "direct"
    }

    async fn request_reply(&self, history: &[ConversationTurn]) -> Result<String, RelayError> {
        self.relay(history.to_vec())
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::llm::provider::GenerativeBackend;
    use tripchat_types::config::{DEFAULT_SYSTEM_INSTRUCTION, DEFAULT_TEMPERATURE};
    use tripchat_types::llm::{GenerationResponse, Usage};

    struct RecordingBackend {
        reply: Option<String>,
        fail: bool,
        seen: Arc<Mutex<Option<GenerationRequest>>>,
    }

    impl GenerativeBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
            *self.seen.lock().unwrap() = Some(request.clone());
            if self.fail {
                return Err(LlmError::Provider {
                    message: "HTTP 503".to_string(),
                });
            }
            Ok(GenerationResponse {
                text: self.reply.clone(),
                model: request.model.clone(),
                finish_reason: Some("STOP".to_string()),
                usage: Usage::default(),
            })
        }
    }

    fn relay_with(reply: Option<&str>, fail: bool) -> (ChatRelay, Arc<Mutex<Option<GenerationRequest>>>) {
        let seen = Arc::new(Mutex::new(None));
        let backend = RecordingBackend {
            reply: reply.map(str::to_string),
            fail,
            seen: seen.clone(),
        };
        (
            ChatRelay::new(BoxGenerativeBackend::new(backend), RelaySettings::default()),
            seen,
        )
    }

    #[tokio::test]
    async fn test_relay_sends_fixed_instruction_and_temperature() {
        let (relay, seen) = relay_with(Some("Hi traveller!"), false);
        let reply = relay
            .relay(vec![ConversationTurn::user("hello"), ConversationTurn::model("hey")])
            .await
            .unwrap();
        assert_eq!(reply, "Hi traveller!");

        let request = seen.lock().unwrap().clone().unwrap();
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.system_instruction.as_deref(), Some(DEFAULT_SYSTEM_INSTRUCTION));
        assert_eq!(request.temperature, Some(DEFAULT_TEMPERATURE));
    }

    #[tokio::test]
    async fn test_missing_text_becomes_empty_string() {
        let (relay, _) = relay_with(None, false);
        assert_eq!(relay.relay(vec![ConversationTurn::user("hi")]).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let (relay, _) = relay_with(None, true);
        assert!(matches!(
            relay.relay(vec![ConversationTurn::user("hi")]).await,
            Err(LlmError::Provider { .. })
        ));
    }

    #[tokio::test]
    async fn test_direct_collaborator_maps_errors() {
        let (relay, _) = relay_with(None, true);
        let err = relay
            .request_reply(&[ConversationTurn::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Transport(msg) if msg.contains("HTTP 503")));
    }

    #[test]
    fn test_settings_from_model_config() {
        let config = ModelConfig {
            name: "gemini-2.5-pro".to_string(),
            temperature: 0.1,
            system_instruction: "Be brief.".to_string(),
            base_url: None,
        };
        let settings = RelaySettings::from(&config);
        assert_eq!(settings.model, "gemini-2.5-pro");
        assert_eq!(settings.system_instruction, "Be brief.");
    }
}
