//! Address book — contact records keyed by lowercased name.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
  Result,
  record::{ContactData, ContactRecord},
};

/// A keyed store of contact records. Lookups are case-insensitive; adding a
/// record whose name is already present (in any case) overwrites the old one.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
  records: BTreeMap<String, ContactRecord>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Insert a record under its lowercased name, replacing any existing entry
  /// with the same key. There is no merge.
  pub fn add(&mut self, record: ContactRecord) {
    self.records.insert(record.name().key(), record);
  }

  pub fn get(&self, name: &str) -> Option<&ContactRecord> {
    self.records.get(&name.to_lowercase())
  }

  pub fn get_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
    self.records.get_mut(&name.to_lowercase())
  }

  /// Remove by name. Returns whether an entry existed.
  pub fn remove(&mut self, name: &str) -> bool {
    self.records.remove(&name.to_lowercase()).is_some()
  }

  /// Records in map iteration order (ascending by key).
  pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
    self.records.values()
  }

  /// All records whose [`ContactRecord::matches`] is true for `query`, in
  /// map iteration order.
  pub fn search(&self, query: &str) -> Vec<&ContactRecord> {
    self.records.values().filter(|r| r.matches(query)).collect()
  }

  /// All records whose birthday falls within `[0, days_ahead]` days of
  /// `today`, in map iteration order.
  pub fn upcoming_birthdays(
    &self,
    days_ahead: i64,
    today: NaiveDate,
  ) -> Vec<&ContactRecord> {
    self
      .records
      .values()
      .filter(|r| {
        r.days_to_birthday(today)
          .is_some_and(|days| (0..=days_ahead).contains(&days))
      })
      .collect()
  }

  // ── Wire conversion ───────────────────────────────────────────────────

  pub fn to_data(&self) -> Vec<ContactData> {
    self.records.values().map(ContactRecord::to_data).collect()
  }

  /// Rebuild a book from its wire shape, re-validating every record.
  pub fn from_data(data: &[ContactData]) -> Result<Self> {
    let mut book = Self::new();
    for entry in data {
      book.add(ContactRecord::from_data(entry)?);
    }
    Ok(book)
  }
}
