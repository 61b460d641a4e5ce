//! Chat session logic: the controller that owns a conversation, the
//! message-row state machine it drives, the display surface it reports to,
//! and the collaborator it asks for replies.

pub mod collaborator;
pub mod controller;
pub mod relay;
pub mod row;
pub mod surface;
