//! The `Storage` trait — the persistence port for the two collections.
//!
//! The trait is implemented by storage backends (e.g. `valet-store-json`).
//! The CLI depends on this abstraction, not on any concrete backend. The
//! interface is synchronous: the shell is single-threaded and every mutating
//! command flushes both collections before returning.

use crate::{book::AddressBook, notebook::Notebook};

pub trait Storage {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load both collections. A missing store is not an error; the backend
  /// returns empty collections for whatever is absent.
  fn load(&self) -> Result<(AddressBook, Notebook), Self::Error>;

  /// Persist both collections. Each call rewrites the full state; there is
  /// no partial or incremental save.
  fn save(
    &self,
    book: &AddressBook,
    notebook: &Notebook,
  ) -> Result<(), Self::Error>;
}
