//! Validated field types — the scalar building blocks of a contact record.
//!
//! Each field validates on construction and stores its canonical form, so a
//! value that exists is a value that passed validation. `Display` renders the
//! canonical string. Validation is pure: re-validating a canonical value
//! always succeeds and yields the same value.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

static PHONE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\+?\d{7,15}$").expect("valid phone regex"));

// The `regex` crate has no lookarounds; the length and double-dot rules are
// separate checks in `Email::new`.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
    .expect("valid email regex")
});

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// ─── Name ────────────────────────────────────────────────────────────────────

/// A contact's display name. Non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
  pub fn new(raw: &str) -> Result<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// The lowercased form used as a collection key.
  pub fn key(&self) -> String { self.0.to_lowercase() }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// A telephone number: 7-15 digits, optional leading `+`.
/// Interior spaces are stripped before validation, so `"+38 050 123 45 67"`
/// canonicalises to `"+380501234567"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
  pub fn new(raw: &str) -> Result<Self> {
    let digits: String =
      raw.trim().chars().filter(|c| *c != ' ').collect();
    if !PHONE_RE.is_match(&digits) {
      return Err(Error::InvalidPhone(raw.to_string()));
    }
    Ok(Self(digits))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Email ───────────────────────────────────────────────────────────────────

/// An email address: single `@`, no consecutive dots, 3-254 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
  pub fn new(raw: &str) -> Result<Self> {
    let cleaned = raw.trim();
    let len = cleaned.chars().count();
    if !(3..=254).contains(&len)
      || cleaned.contains("..")
      || !EMAIL_RE.is_match(cleaned)
    {
      return Err(Error::InvalidEmail(raw.to_string()));
    }
    Ok(Self(cleaned.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// A free-form postal address. Non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
  pub fn new(raw: &str) -> Result<Self> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
      return Err(Error::EmptyAddress);
    }
    Ok(Self(cleaned.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Birthday ────────────────────────────────────────────────────────────────

/// A birthday as a calendar date. Parsed from and rendered to `YYYY-MM-DD`
/// regardless of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
  pub fn new(raw: &str) -> Result<Self> {
    NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT)
      .map(Self)
      .map_err(|_| Error::InvalidBirthday(raw.to_string()))
  }

  pub fn from_date(date: NaiveDate) -> Self { Self(date) }

  pub fn date(&self) -> NaiveDate { self.0 }
}

impl fmt::Display for Birthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
  }
}
