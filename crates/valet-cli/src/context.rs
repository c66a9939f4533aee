//! Shared application state threaded through every command handler.

use valet_core::{book::AddressBook, notebook::Notebook, store::Storage};

use crate::error::{CommandError, CommandResult};

/// The two collections plus the persistence port. Passed by mutable
/// reference into each handler; there is no global state.
pub struct AppContext<S: Storage> {
  pub book:     AddressBook,
  pub notebook: Notebook,
  pub storage:  S,
}

impl<S: Storage> AppContext<S> {
  pub fn new(book: AddressBook, notebook: Notebook, storage: S) -> Self {
    Self {
      book,
      notebook,
      storage,
    }
  }

  /// Flush both collections. Every mutating command calls this before
  /// returning; a backend failure becomes a visible command error.
  pub fn save(&self) -> CommandResult<()> {
    self
      .storage
      .save(&self.book, &self.notebook)
      .map_err(|e| CommandError::Storage(e.to_string()))?;
    tracing::debug!(
      contacts = self.book.len(),
      notes = self.notebook.len(),
      "state saved"
    );
    Ok(())
  }
}
