//! Flat-file JSON backend for the Valet storage port.
//!
//! Contacts and notes live in two separate files under a base directory.
//! Each save rewrites both files in full; there is no incremental write.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;
