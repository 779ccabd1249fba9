//! HTTP plumbing shared by the trivia and coffee-shop servers.
//!
//! Both binaries use the same configuration variables, JSON envelopes,
//! middleware stack and shutdown handling; only their routes and error
//! messages differ.

pub mod config;
pub mod envelope;
pub mod health;
pub mod router;
pub mod server;
pub mod telemetry;
