//! Interactive terminal chat.
//!
//! Drives a `ChatController` from a readline prompt, showing replies through
//! [`surface::TerminalSurface`]. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod surface;
