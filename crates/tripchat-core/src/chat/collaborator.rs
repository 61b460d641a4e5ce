//! ChatCollaborator trait and its object-safe wrapper.
//!
//! A collaborator takes the full ordered history and returns the model's
//! reply text. The HTTP client in tripchat-infra and [`ChatRelay`] both
//! implement it.
//!
//! [`ChatRelay`]: super::relay::ChatRelay

use std::future::Future;
use std::pin::Pin;

use tripchat_types::chat::ConversationTurn;
use tripchat_types::error::RelayError;

/// The service boundary the controller sends conversations to.
pub trait ChatCollaborator: Send + Sync {
    /// Short name for logs (e.g., "http", "direct").
    fn name(&self) -> &str;

    /// Send every turn, oldest first, and return the reply text.
    ///
    /// An empty string is a valid return value; the controller decides what
    /// an empty reply means.
    fn request_reply(
        &self,
        history: &[ConversationTurn],
    ) -> impl Future<Output = Result<String, RelayError>> + Send;
}

/// Object-safe version of [`ChatCollaborator`].
pub trait ChatCollaboratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn request_reply_boxed<'a>(
        &'a self,
        history: &'a [ConversationTurn],
    ) -> Pin<Box<dyn Future<Output = Result<String, RelayError>> + Send + 'a>>;
}

impl<T: ChatCollaborator> ChatCollaboratorDyn for T {
    fn name(&self) -> &str {
        ChatCollaborator::name(self)
    }

    fn request_reply_boxed<'a>(
        &'a self,
        history: &'a [ConversationTurn],
    ) -> Pin<Box<dyn Future<Output = Result<String, RelayError>> + Send + 'a>> {
        Box::pin(self.request_reply(history))
    }
}

/// Type-erased collaborator so the controller can be built over either the
/// HTTP client or an in-process relay.
pub struct BoxChatCollaborator {
    inner: Box<dyn ChatCollaboratorDyn + Send + Sync>,
}

impl BoxChatCollaborator {
    pub fn new<T: ChatCollaborator + 'static>(collaborator: T) -> Self {
        Self {
            inner: Box::new(collaborator),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn request_reply(&self, history: &[ConversationTurn]) -> Result<String, RelayError> {
        self.inner.request_reply_boxed(history).await
    }
}
