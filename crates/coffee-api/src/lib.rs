//! Coffee-shop API server library.
//!
//! Exposes the router builder, state, token verification and error handling
//! so integration tests and the binary entrypoint build the same application.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
