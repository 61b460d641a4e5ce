//! POST /api/chat
//!
//! Body `{ "conversation": [ {role, text}, ... ] }`. Replies `{ "result" }`
//! with the model text, `{ "error" }` with 400 for a malformed body or 500
//! when the backend fails.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{error, info};

use tripchat_types::wire::{CONVERSATION_NOT_ARRAY, ChatReply, ChatRequest};

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::Validation(CONVERSATION_NOT_ARRAY.to_string())
        }
        other => AppError::Validation(other.body_text()),
    })?;

    let turns = request.into_turns()?;
    info!(turns = turns.len(), "Relaying chat request");

    let result = state.relay.relay(turns).await.map_err(|e| {
        error!(error = %e, "Backend call failed");
        AppError::from(e)
    })?;

    Ok(Json(ChatReply { result }))
}
