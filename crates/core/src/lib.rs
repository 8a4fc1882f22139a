//! Domain types and errors shared by the database and API crates.

pub mod error;
pub mod types;
