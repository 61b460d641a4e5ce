//! Application error type mapping to HTTP status codes and the `{error}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tripchat_types::error::RelayError;
use tripchat_types::llm::LlmError;
use tripchat_types::wire::ErrorBody;

/// Handler error.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request body (400).
    Validation(String),
    /// The generative backend failed (500).
    Upstream(String),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::Validation(msg) => AppError::Validation(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let resp = AppError::Validation("bad".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::from(LlmError::RateLimited).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_relay_error_mapping() {
        assert!(matches!(
            AppError::from(RelayError::Validation("x".to_string())),
            AppError::Validation(m) if m == "x"
        ));
        assert!(matches!(
            AppError::from(RelayError::Transport("down".to_string())),
            AppError::Upstream(_)
        ));
    }
}
