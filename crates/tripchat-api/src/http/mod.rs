//! HTTP layer: `POST /api/chat`, `GET /health` and the static front end.

pub mod error;
pub mod handlers;
pub mod router;
