//! Observability for tripchat: subscriber setup and the span attribute names
//! used when instrumenting generative backend calls.

pub mod genai_attrs;
pub mod tracing_setup;

pub use tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};
