//! Contact record — the aggregate of one person's validated fields.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
  Result,
  field::{Address, Birthday, Email, Name, Phone},
};

// ─── Wire shape ──────────────────────────────────────────────────────────────

/// The serialised form of a [`ContactRecord`], as written by the storage
/// backend. Field values are plain strings; [`ContactRecord::from_data`]
/// re-validates all of them on the way back in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactData {
  pub name:     String,
  #[serde(default)]
  pub phones:   Vec<String>,
  #[serde(default)]
  pub email:    Option<String>,
  #[serde(default)]
  pub address:  Option<String>,
  /// `YYYY-MM-DD`, or `None` when unset.
  #[serde(default)]
  pub birthday: Option<String>,
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A single contact. The name is the record's identity and never changes;
/// every other field is set through a validating mutator, so invalid values
/// never enter the record silently.
#[derive(Debug, Clone)]
pub struct ContactRecord {
  name:     Name,
  phones:   Vec<Phone>,
  email:    Option<Email>,
  address:  Option<Address>,
  birthday: Option<Birthday>,
}

impl ContactRecord {
  pub fn new(name: &str) -> Result<Self> {
    Ok(Self {
      name:     Name::new(name)?,
      phones:   Vec::new(),
      email:    None,
      address:  None,
      birthday: None,
    })
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phones(&self) -> &[Phone] { &self.phones }

  pub fn email(&self) -> Option<&Email> { self.email.as_ref() }

  pub fn address(&self) -> Option<&Address> { self.address.as_ref() }

  pub fn birthday(&self) -> Option<&Birthday> { self.birthday.as_ref() }

  // ── Phones ────────────────────────────────────────────────────────────

  /// Validate and append a phone. Duplicates are allowed; callers that want
  /// uniqueness must check first.
  pub fn add_phone(&mut self, raw: &str) -> Result<()> {
    self.phones.push(Phone::new(raw)?);
    Ok(())
  }

  /// Remove the first phone whose canonical value equals `value`.
  /// Returns whether a phone was removed.
  pub fn remove_phone(&mut self, value: &str) -> bool {
    match self.phones.iter().position(|p| p.as_str() == value) {
      Some(idx) => {
        self.phones.remove(idx);
        true
      }
      None => false,
    }
  }

  /// Replace the first phone whose canonical value equals `old` with a
  /// freshly validated `new`. Returns `false` when `old` is not present;
  /// an invalid `new` fails before any mutation.
  pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
    let replacement = Phone::new(new)?;
    match self.phones.iter().position(|p| p.as_str() == old) {
      Some(idx) => {
        self.phones[idx] = replacement;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  // ── Optional fields ───────────────────────────────────────────────────

  /// `None` or an empty string clears the email; anything else validates
  /// and replaces it.
  pub fn set_email(&mut self, raw: Option<&str>) -> Result<()> {
    self.email = match raw {
      Some(s) if !s.trim().is_empty() => Some(Email::new(s)?),
      _ => None,
    };
    Ok(())
  }

  pub fn set_address(&mut self, raw: Option<&str>) -> Result<()> {
    self.address = match raw {
      Some(s) if !s.trim().is_empty() => Some(Address::new(s)?),
      _ => None,
    };
    Ok(())
  }

  pub fn set_birthday(&mut self, raw: Option<&str>) -> Result<()> {
    self.birthday = match raw {
      Some(s) if !s.trim().is_empty() => Some(Birthday::new(s)?),
      _ => None,
    };
    Ok(())
  }

  // ── Queries ───────────────────────────────────────────────────────────

  /// Days until the next occurrence of the birthday, counted from `today`
  /// (0 when the birthday is today). `None` when no birthday is set.
  ///
  /// A birthday falling strictly before `today` in the current year rolls
  /// over to next year. Feb-29 birthdays clamp to Feb-28 in non-leap years.
  pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
    let birthday = self.birthday?.date();
    let mut next = project_onto_year(birthday, today.year());
    if next < today {
      next = project_onto_year(birthday, today.year() + 1);
    }
    Some((next - today).num_days())
  }

  /// Case-insensitive substring test against the name, every phone, the
  /// email, and the address. The birthday does not participate.
  pub fn matches(&self, query: &str) -> bool {
    let query = query.to_lowercase();
    if self.name.as_str().to_lowercase().contains(&query) {
      return true;
    }
    if self.phones.iter().any(|p| p.as_str().contains(&query)) {
      return true;
    }
    if self
      .email
      .as_ref()
      .is_some_and(|e| e.as_str().to_lowercase().contains(&query))
    {
      return true;
    }
    self
      .address
      .as_ref()
      .is_some_and(|a| a.as_str().to_lowercase().contains(&query))
  }

  // ── Wire conversion ───────────────────────────────────────────────────

  pub fn to_data(&self) -> ContactData {
    ContactData {
      name:     self.name.as_str().to_string(),
      phones:   self.phones.iter().map(|p| p.as_str().to_string()).collect(),
      email:    self.email.as_ref().map(|e| e.as_str().to_string()),
      address:  self.address.as_ref().map(|a| a.as_str().to_string()),
      birthday: self.birthday.as_ref().map(|b| b.to_string()),
    }
  }

  /// Rebuild a record from its wire shape, re-validating every field.
  pub fn from_data(data: &ContactData) -> Result<Self> {
    let mut record = Self::new(&data.name)?;
    for phone in &data.phones {
      record.add_phone(phone)?;
    }
    record.set_email(data.email.as_deref())?;
    record.set_address(data.address.as_deref())?;
    record.set_birthday(data.birthday.as_deref())?;
    Ok(record)
  }
}

impl fmt::Display for ContactRecord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let phones = if self.phones.is_empty() {
      "-".to_string()
    } else {
      self
        .phones
        .iter()
        .map(Phone::to_string)
        .collect::<Vec<_>>()
        .join(", ")
    };
    let unset = || "-".to_string();
    write!(
      f,
      "{} | Phones: {} | Email: {} | Address: {} | Birthday: {}",
      self.name,
      phones,
      self.email.as_ref().map_or_else(unset, Email::to_string),
      self.address.as_ref().map_or_else(unset, Address::to_string),
      self.birthday.as_ref().map_or_else(unset, Birthday::to_string),
    )
  }
}

/// `month/day` of `date` applied to `year`. Feb-29 clamps to Feb-28 when
/// `year` is not a leap year.
fn project_onto_year(date: NaiveDate, year: i32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
    NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
  })
}
