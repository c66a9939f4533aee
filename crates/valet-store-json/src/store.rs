//! [`JsonStore`] — the flat-file implementation of [`Storage`].

use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use valet_core::{
  book::AddressBook, notebook::Notebook, record::ContactData, store::Storage,
};

use crate::{Error, Result};

const CONTACTS_FILE: &str = "contacts.json";
const NOTES_FILE: &str = "notes.json";

/// A Valet store backed by two JSON files under one directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
  contacts_path: PathBuf,
  notes_path:    PathBuf,
}

impl JsonStore {
  /// Open (or create) a store under `base_dir`. The directory is created
  /// if it does not exist; the files are created lazily on first save.
  pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
    let base_dir = base_dir.as_ref();
    fs::create_dir_all(base_dir).map_err(|source| Error::Io {
      path: base_dir.to_path_buf(),
      source,
    })?;
    Ok(Self {
      contacts_path: base_dir.join(CONTACTS_FILE),
      notes_path:    base_dir.join(NOTES_FILE),
    })
  }

  pub fn contacts_path(&self) -> &Path { &self.contacts_path }

  pub fn notes_path(&self) -> &Path { &self.notes_path }

  fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    if !path.exists() {
      return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let entries =
      serde_json::from_str(&raw).map_err(|source| Error::Malformed {
        path: path.to_path_buf(),
        source,
      })?;
    Ok(Some(entries))
  }

  fn write_file<T: Serialize>(path: &Path, entries: &[T]) -> Result<()> {
    let raw =
      serde_json::to_string_pretty(entries).map_err(|source| Error::Malformed {
        path: path.to_path_buf(),
        source,
      })?;
    fs::write(path, raw).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })
  }
}

impl Storage for JsonStore {
  type Error = Error;

  fn load(&self) -> Result<(AddressBook, Notebook)> {
    let book = match Self::read_file::<ContactData>(&self.contacts_path)? {
      Some(entries) => AddressBook::from_data(&entries)?,
      None => AddressBook::new(),
    };
    let notebook = match Self::read_file(&self.notes_path)? {
      Some(entries) => Notebook::from_data(&entries),
      None => Notebook::new(),
    };
    Ok((book, notebook))
  }

  fn save(&self, book: &AddressBook, notebook: &Notebook) -> Result<()> {
    Self::write_file(&self.contacts_path, &book.to_data())?;
    Self::write_file(&self.notes_path, &notebook.to_data())
  }
}
