//! `/api/chat` wire contract.
//!
//! Request: `{ "conversation": [ { "role": "user" | "model", "text": "..." } ] }`
//! Success: `{ "result": "..." }`
//! Failure: `{ "error": "..." }`

use serde::{Deserialize, Serialize};

use crate::chat::ConversationTurn;
use crate::error::RelayError;

/// Message returned when `conversation` is absent or not an array.
pub const CONVERSATION_NOT_ARRAY: &str = "Conversation must be an array";

/// Request body for `POST /api/chat`.
///
/// `conversation` is kept as raw JSON so a missing or mistyped field can be
/// reported with the contract's `{ "error": ... }` body rather than a
/// framework rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub conversation: Option<serde_json::Value>,
}

impl ChatRequest {
    /// Build a request from an ordered list of turns.
    pub fn from_turns(turns: &[ConversationTurn]) -> Self {
        Self {
            conversation: Some(serde_json::to_value(turns).unwrap_or_default()),
        }
    }

    /// Validate the request shape and return the turns in order.
    pub fn into_turns(self) -> Result<Vec<ConversationTurn>, RelayError> {
        let value = match self.conversation {
            Some(value @ serde_json::Value::Array(_)) => value,
            _ => return Err(RelayError::Validation(CONVERSATION_NOT_ARRAY.to_string())),
        };

        serde_json::from_value(value)
            .map_err(|e| RelayError::Validation(format!("invalid conversation turn: {e}")))
    }
}

/// Successful reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub result: String,
}

/// Error reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
