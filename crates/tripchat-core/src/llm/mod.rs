//! Generative backend abstractions for tripchat.
//!
//! - `GenerativeBackend`: RPITIT trait for concrete model clients
//! - `BoxGenerativeBackend`: object-safe wrapper for dynamic dispatch

pub mod box_backend;
pub mod provider;
