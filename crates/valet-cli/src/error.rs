//! The command error type — everything a handler can fail with.
//!
//! Every variant is a user-facing domain error: the shell prints it as
//! `Error: <message>` and keeps running. Nothing here is fatal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
  /// Missing or unusable arguments; carries the usage line to show.
  #[error("{0}")]
  Usage(String),

  #[error("{kind} '{name}' not found.")]
  NotFound { kind: &'static str, name: String },

  /// Malformed argument syntax (unbalanced quotes, non-integer counts).
  #[error("{0}")]
  BadArgument(String),

  #[error(transparent)]
  Validation(#[from] valet_core::Error),

  /// The persistence port reported a failure; never swallowed.
  #[error("failed to save: {0}")]
  Storage(String),
}

impl CommandError {
  pub fn usage(text: impl Into<String>) -> Self { Self::Usage(text.into()) }

  pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
    Self::NotFound {
      kind,
      name: name.into(),
    }
  }
}

pub type CommandResult<T = crate::registry::CommandOutcome> =
  std::result::Result<T, CommandError>;
