//! Relay API
//!
//! Axum-based HTTP gateway with routes and middleware for the quote-relay
//! orchestrator.

pub mod extractors;
pub mod handlers;
pub mod pagination;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
