//! Trivia API server library.
//!
//! Exposes the router builder, state and error handling so integration tests
//! and the binary entrypoint build the exact same application.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
