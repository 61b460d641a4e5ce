//! HTTP collaborator: talks to a running relay server's `/api/chat`.

use tracing::debug;

use tripchat_core::chat::collaborator::ChatCollaborator;
use tripchat_types::chat::ConversationTurn;
use tripchat_types::error::RelayError;
use tripchat_types::wire::{ChatReply, ChatRequest, ErrorBody};

/// [`ChatCollaborator`] that POSTs the conversation to a relay server.
#[derive(Debug, Clone)]
pub struct HttpChatCollaborator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatCollaborator {
    /// `server_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(server_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", server_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Turn a non-2xx response body into a [`RelayError::Status`], preferring the
/// server's `{error}` message over the raw body.
fn status_error(status: u16, body: &str) -> RelayError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string());
    RelayError::Status { status, message }
}

impl ChatCollaborator for HttpChatCollaborator {
    fn name(&self) -> &str {
        "http"
    }

    async fn request_reply(&self, history: &[ConversationTurn]) -> Result<String, RelayError> {
        debug!(endpoint = %self.endpoint, turns = history.len(), "POST chat");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest::from_turns(history))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| RelayError::Transport(format!("invalid reply body: {e}")))?;
        Ok(reply.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalises_trailing_slash() {
        assert_eq!(
            HttpChatCollaborator::new("http://127.0.0.1:3000/").endpoint(),
            "http://127.0.0.1:3000/api/chat"
        );
        assert_eq!(
            HttpChatCollaborator::new("http://example.test").endpoint(),
            "http://example.test/api/chat"
        );
    }

    #[test]
    fn test_status_error_uses_error_body() {
        assert_eq!(
            status_error(400, r#"{"error":"Conversation must be an array"}"#),
            RelayError::Status {
                status: 400,
                message: "Conversation must be an array".to_string(),
            }
        );
    }

    #[test]
    fn test_status_error_falls_back_to_raw_body() {
        assert_eq!(
            status_error(502, "Bad Gateway\n"),
            RelayError::Status {
                status: 502,
                message: "Bad Gateway".to_string(),
            }
        );
    }
}
