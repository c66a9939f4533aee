//! Note — a titled piece of free-form text with a set of tags.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Wire shape ──────────────────────────────────────────────────────────────

/// The serialised form of a [`Note`]. Tags are written in ascending order so
/// saved files are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteData {
  pub title:   String,
  #[serde(default)]
  pub content: String,
  #[serde(default)]
  pub tags:    Vec<String>,
}

// ─── Note ────────────────────────────────────────────────────────────────────

/// A note. Tags are stored trimmed and lowercased; the `BTreeSet` keeps them
/// deduplicated and in sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
  pub title:   String,
  pub content: String,
  tags:        BTreeSet<String>,
}

impl Note {
  pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
    Self {
      title:   title.into(),
      content: content.into(),
      tags:    BTreeSet::new(),
    }
  }

  /// The lowercased title, used as the notebook key.
  pub fn key(&self) -> String { self.title.to_lowercase() }

  /// Tags in ascending order.
  pub fn tags(&self) -> impl Iterator<Item = &str> {
    self.tags.iter().map(String::as_str)
  }

  pub fn has_tag(&self, tag: &str) -> bool {
    self.tags.contains(&normalize_tag(tag))
  }

  /// Insert each tag trimmed and lowercased; empty tags are dropped.
  pub fn add_tags<I, S>(&mut self, tags: I)
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    for tag in tags {
      let tag = normalize_tag(tag.as_ref());
      if !tag.is_empty() {
        self.tags.insert(tag);
      }
    }
  }

  /// Remove a tag (normalised before lookup). Returns whether it was present.
  pub fn remove_tag(&mut self, tag: &str) -> bool {
    self.tags.remove(&normalize_tag(tag))
  }

  /// Case-insensitive substring test against the title, the content, or any
  /// tag. A query matching inside a tag counts; exact tag equality is not
  /// required.
  pub fn matches(&self, query: &str) -> bool {
    let query = query.to_lowercase();
    self.title.to_lowercase().contains(&query)
      || self.content.to_lowercase().contains(&query)
      || self.tags.iter().any(|tag| tag.contains(&query))
  }

  // ── Wire conversion ───────────────────────────────────────────────────

  pub fn to_data(&self) -> NoteData {
    NoteData {
      title:   self.title.clone(),
      content: self.content.clone(),
      tags:    self.tags.iter().cloned().collect(),
    }
  }

  pub fn from_data(data: &NoteData) -> Self {
    let mut note = Self::new(data.title.clone(), data.content.clone());
    note.add_tags(data.tags.iter());
    note
  }
}

impl fmt::Display for Note {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tags = self.tags.iter().cloned().collect::<Vec<_>>().join(", ");
    write!(
      f,
      "{} [{}]",
      self.title,
      if tags.is_empty() { "-" } else { tags.as_str() }
    )
  }
}

fn normalize_tag(tag: &str) -> String { tag.trim().to_lowercase() }
