//! Error types for `valet-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("name cannot be empty")]
  EmptyName,

  #[error("phone number must contain 7-15 digits and may start with '+': {0:?}")]
  InvalidPhone(String),

  #[error("invalid email format: {0:?}")]
  InvalidEmail(String),

  #[error("address cannot be empty")]
  EmptyAddress,

  #[error("birthday must be in YYYY-MM-DD format: {0:?}")]
  InvalidBirthday(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
