//! Notebook — notes keyed by lowercased title, with tag-based queries.

use std::collections::BTreeMap;

use crate::note::{Note, NoteData};

/// A keyed store of notes. Same rules as the address book: case-insensitive
/// lookups, silent overwrite on key collision.
#[derive(Debug, Clone, Default)]
pub struct Notebook {
  notes: BTreeMap<String, Note>,
}

impl Notebook {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.notes.len() }

  pub fn is_empty(&self) -> bool { self.notes.is_empty() }

  pub fn add(&mut self, note: Note) {
    self.notes.insert(note.key(), note);
  }

  pub fn get(&self, title: &str) -> Option<&Note> {
    self.notes.get(&title.to_lowercase())
  }

  pub fn get_mut(&mut self, title: &str) -> Option<&mut Note> {
    self.notes.get_mut(&title.to_lowercase())
  }

  pub fn remove(&mut self, title: &str) -> bool {
    self.notes.remove(&title.to_lowercase()).is_some()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Note> { self.notes.values() }

  /// All notes whose [`Note::matches`] is true for `query`, in map
  /// iteration order.
  pub fn search(&self, query: &str) -> Vec<&Note> {
    self.notes.values().filter(|n| n.matches(query)).collect()
  }

  /// Notes carrying exactly the given tag (normalised before comparison),
  /// sorted by lowercased title.
  pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
    let mut matches: Vec<&Note> =
      self.notes.values().filter(|n| n.has_tag(tag)).collect();
    matches.sort_by_key(|n| n.title.to_lowercase());
    matches
  }

  /// All notes ordered by (sorted tag list, lowercased title). A note with
  /// no tags sorts under a single empty-string placeholder tag, so untagged
  /// notes group together ahead of every tagged note.
  pub fn sorted_by_tags(&self) -> Vec<&Note> {
    let mut notes: Vec<&Note> = self.notes.values().collect();
    notes.sort_by_cached_key(|n| {
      let mut tags: Vec<String> = n.tags().map(str::to_string).collect();
      if tags.is_empty() {
        tags.push(String::new());
      }
      (tags, n.title.to_lowercase())
    });
    notes
  }

  // ── Wire conversion ───────────────────────────────────────────────────

  pub fn to_data(&self) -> Vec<NoteData> {
    self.notes.values().map(Note::to_data).collect()
  }

  pub fn from_data(data: &[NoteData]) -> Self {
    let mut notebook = Self::new();
    for entry in data {
      notebook.add(Note::from_data(entry));
    }
    notebook
  }
}
