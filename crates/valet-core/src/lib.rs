//! Core domain types for the Valet personal assistant.
//!
//! This crate is deliberately free of I/O and terminal dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod book;
pub mod error;
pub mod field;
pub mod note;
pub mod notebook;
pub mod record;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
