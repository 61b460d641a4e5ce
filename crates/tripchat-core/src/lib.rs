//! Business logic for tripchat.
//!
//! Holds the markdown-lite renderer, the chat session controller with its
//! message-row state machine, and the "ports" (collaborator and generative
//! backend traits) that `tripchat-infra` implements. Depends only on
//! `tripchat-types` -- never on `tripchat-infra` or any network crate.

pub mod chat;
pub mod llm;
pub mod render;
