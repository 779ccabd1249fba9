//! Entity structs (database rows) and their request DTOs.

pub mod category;
pub mod drink;
pub mod question;
