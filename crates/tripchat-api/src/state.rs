//! Shared state for the relay server.

use std::path::PathBuf;
use std::sync::Arc;

use tripchat_core::chat::relay::ChatRelay;

/// Handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
    /// Front-end directory served as the fallback route, if it exists.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(relay: ChatRelay, static_dir: Option<PathBuf>) -> Self {
        Self {
            relay: Arc::new(relay),
            static_dir,
        }
    }
}
