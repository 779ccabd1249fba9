//! Domain primitives shared by the trivia and coffee-shop backends.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates build on
//! these types so the rules (paging, quiz sampling, permission checks, recipe
//! validation) can be unit tested in isolation.

pub mod auth;
pub mod error;
pub mod lenient;
pub mod pagination;
pub mod quiz;
pub mod recipe;
pub mod trivia;
pub mod types;
