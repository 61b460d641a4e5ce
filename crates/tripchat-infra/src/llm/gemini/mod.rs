//! Google Gemini backend.
//!
//! [`GeminiProvider`] implements
//! [`GenerativeBackend`](tripchat_core::llm::provider::GenerativeBackend)
//! over the non-streaming `generateContent` REST call.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
