//! Infrastructure layer for tripchat.
//!
//! Implements the ports from `tripchat-core` against the outside world: the
//! Gemini `generateContent` API, the relay server's `/api/chat` endpoint,
//! and the TOML config file.

pub mod config;
pub mod llm;
pub mod relay_client;
