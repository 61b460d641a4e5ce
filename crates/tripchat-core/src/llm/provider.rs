//! GenerativeBackend trait definition.
//!
//! The abstraction every model client implements. Uses native async fn in
//! traits (RPITIT); see `BoxGenerativeBackend` for dynamic dispatch.

use tripchat_types::llm::{GenerationRequest, GenerationResponse, LlmError};

/// Trait for hosted generative-text backends (Gemini, test stubs).
///
/// Implementations live in tripchat-infra (e.g., `GeminiProvider`).
pub trait GenerativeBackend: Send + Sync {
    /// Human-readable backend name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a generation request and receive the full response.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, LlmError>> + Send;
}
