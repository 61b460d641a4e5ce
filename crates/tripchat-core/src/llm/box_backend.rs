//! BoxGenerativeBackend -- object-safe dynamic dispatch wrapper for
//! [`GenerativeBackend`].
//!
//! 1. Define an object-safe `GenerativeBackendDyn` trait with boxed futures
//! 2. Blanket-impl `GenerativeBackendDyn` for all `T: GenerativeBackend`
//! 3. `BoxGenerativeBackend` wraps `Box<dyn GenerativeBackendDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use tripchat_types::llm::{GenerationRequest, GenerationResponse, LlmError};

use super::provider::GenerativeBackend;

/// Object-safe version of [`GenerativeBackend`] with boxed futures.
pub trait GenerativeBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, LlmError>> + Send + 'a>>;
}

impl<T: GenerativeBackend> GenerativeBackendDyn for T {
    fn name(&self) -> &str {
        GenerativeBackend::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased generative backend for runtime selection.
///
/// `GenerativeBackend` uses RPITIT and cannot be a trait object directly;
/// this wrapper provides the same methods over `dyn GenerativeBackendDyn`.
pub struct BoxGenerativeBackend {
    inner: Box<dyn GenerativeBackendDyn + Send + Sync>,
}

impl BoxGenerativeBackend {
    pub fn new<T: GenerativeBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        self.inner.generate_boxed(request).await
    }
}
