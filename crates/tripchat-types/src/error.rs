use thiserror::Error;

/// Errors from a chat collaborator exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The request did not have the expected shape.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The request never produced an HTTP response (connection refused, DNS,
    /// body could not be read or decoded).
    #[error("transport error: {0}")]
    Transport(String),

    /// The collaborator answered with a non-2xx status.
    #[error("server error {status}: {message}")]
    Status { status: u16, message: String },

    /// A well-formed response that carried no usable text.
    #[error("empty reply")]
    EmptyReply,
}

/// Errors from message-row state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Only a row that is still thinking can be resolved.
    #[error("message row is not pending")]
    NotPending,

    #[error("message row not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_display() {
        let err = RelayError::Status {
            status: 500,
            message: "upstream exploded".to_string(),
        };
        assert_eq!(err.to_string(), "server error 500: upstream exploded");
    }

    #[test]
    fn test_validation_error_display() {
        let err = RelayError::Validation("Conversation must be an array".to_string());
        assert_eq!(err.to_string(), "invalid request: Conversation must be an array");
    }

    #[test]
    fn test_row_error_display() {
        assert_eq!(RowError::NotPending.to_string(), "message row is not pending");
    }
}
