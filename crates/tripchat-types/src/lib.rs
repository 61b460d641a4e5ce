//! Shared domain types for tripchat.
//!
//! This crate contains the types passed between the renderer, the chat
//! controller, the relay service and the HTTP boundary: conversation turns,
//! the `/api/chat` wire contract, generation requests, configuration and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod wire;
