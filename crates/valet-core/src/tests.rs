//! Unit tests for the domain types.

use chrono::NaiveDate;

use crate::{
  Error,
  book::AddressBook,
  field::{Birthday, Email, Name, Phone},
  note::Note,
  notebook::Notebook,
  record::{ContactData, ContactRecord},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ─── Fields ──────────────────────────────────────────────────────────────────

#[test]
fn phone_accepts_international_and_minimal() {
  assert_eq!(Phone::new("+380501234567").unwrap().as_str(), "+380501234567");
  assert_eq!(Phone::new("1234567").unwrap().as_str(), "1234567");
}

#[test]
fn phone_strips_spaces_before_validation() {
  assert_eq!(
    Phone::new(" +38 050 123 45 67 ").unwrap().as_str(),
    "+380501234567"
  );
}

#[test]
fn phone_rejects_short_and_non_digit() {
  assert!(matches!(Phone::new("123"), Err(Error::InvalidPhone(_))));
  assert!(matches!(Phone::new("12a4567"), Err(Error::InvalidPhone(_))));
}

#[test]
fn phone_validation_is_idempotent() {
  let canonical = Phone::new("+380501234567").unwrap();
  let again = Phone::new(canonical.as_str()).unwrap();
  assert_eq!(canonical, again);
}

#[test]
fn email_accepts_minimal() {
  assert_eq!(Email::new("a@b.co").unwrap().as_str(), "a@b.co");
}

#[test]
fn email_rejects_double_dot_and_missing_at() {
  assert!(matches!(Email::new("a..b@b.co"), Err(Error::InvalidEmail(_))));
  assert!(matches!(Email::new("noatsign"), Err(Error::InvalidEmail(_))));
}

#[test]
fn name_rejects_whitespace_only() {
  assert!(matches!(Name::new("   "), Err(Error::EmptyName)));
  assert_eq!(Name::new("  John ").unwrap().as_str(), "John");
}

#[test]
fn birthday_round_trips_exact_format() {
  let b = Birthday::new("2000-02-29").unwrap();
  assert_eq!(b.to_string(), "2000-02-29");
}

#[test]
fn birthday_rejects_malformed() {
  assert!(matches!(
    Birthday::new("29-02-2000"),
    Err(Error::InvalidBirthday(_))
  ));
  assert!(matches!(
    Birthday::new("2000-13-01"),
    Err(Error::InvalidBirthday(_))
  ));
}

// ─── Contact record ──────────────────────────────────────────────────────────

fn record(name: &str) -> ContactRecord {
  ContactRecord::new(name).unwrap()
}

#[test]
fn remove_phone_removes_first_exact_match() {
  let mut r = record("Ann");
  r.add_phone("1234567").unwrap();
  r.add_phone("7654321").unwrap();
  r.add_phone("1234567").unwrap();

  assert!(r.remove_phone("1234567"));
  let left: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
  assert_eq!(left, vec!["7654321", "1234567"]);

  assert!(!r.remove_phone("0000000"));
}

#[test]
fn edit_phone_replaces_and_reports_missing() {
  let mut r = record("Ann");
  r.add_phone("1234567").unwrap();

  assert!(r.edit_phone("1234567", "7654321").unwrap());
  assert_eq!(r.phones()[0].as_str(), "7654321");

  assert!(!r.edit_phone("1234567", "1111111").unwrap());
}

#[test]
fn edit_phone_invalid_replacement_leaves_record_untouched() {
  let mut r = record("Ann");
  r.add_phone("1234567").unwrap();

  assert!(r.edit_phone("1234567", "bad").is_err());
  assert_eq!(r.phones()[0].as_str(), "1234567");
}

#[test]
fn set_email_empty_clears() {
  let mut r = record("Ann");
  r.set_email(Some("ann@example.com")).unwrap();
  assert!(r.email().is_some());

  r.set_email(Some("")).unwrap();
  assert!(r.email().is_none());

  r.set_email(Some("ann@example.com")).unwrap();
  r.set_email(None).unwrap();
  assert!(r.email().is_none());
}

#[test]
fn days_to_birthday_counts_forward() {
  let mut r = record("Ann");
  r.set_birthday(Some("1990-03-15")).unwrap();
  assert_eq!(r.days_to_birthday(date(2024, 3, 10)), Some(5));
}

#[test]
fn days_to_birthday_rolls_to_next_year_when_passed() {
  let mut r = record("Ann");
  r.set_birthday(Some("1990-03-15")).unwrap();
  // 2024-03-20 -> 2025-03-15.
  let expected = (date(2025, 3, 15) - date(2024, 3, 20)).num_days();
  assert_eq!(r.days_to_birthday(date(2024, 3, 20)), Some(expected));
}

#[test]
fn days_to_birthday_is_zero_on_the_day() {
  let mut r = record("Ann");
  r.set_birthday(Some("1990-03-15")).unwrap();
  assert_eq!(r.days_to_birthday(date(2024, 3, 15)), Some(0));
}

#[test]
fn days_to_birthday_none_without_birthday() {
  assert_eq!(record("Ann").days_to_birthday(date(2024, 1, 1)), None);
}

#[test]
fn feb_29_clamps_to_feb_28_in_non_leap_years() {
  let mut r = record("Leap");
  r.set_birthday(Some("2000-02-29")).unwrap();
  // 2025 is not a leap year; the birthday lands on Feb 28.
  assert_eq!(r.days_to_birthday(date(2025, 2, 28)), Some(0));
  assert_eq!(r.days_to_birthday(date(2025, 2, 25)), Some(3));
  // In a leap year the real date is used.
  assert_eq!(r.days_to_birthday(date(2024, 2, 25)), Some(4));
}

#[test]
fn matches_covers_all_fields_but_birthday() {
  let mut r = record("John Smith");
  r.add_phone("+380501234567").unwrap();
  r.set_email(Some("john@example.com")).unwrap();
  r.set_address(Some("12 Main St")).unwrap();
  r.set_birthday(Some("1990-03-15")).unwrap();

  assert!(r.matches("SMITH"));
  assert!(r.matches("05012"));
  assert!(r.matches("Example.COM"));
  assert!(r.matches("main st"));
  assert!(!r.matches("1990"));
  assert!(!r.matches("nowhere"));
}

#[test]
fn record_data_round_trip_is_lossless() {
  let mut r = record("Ann");
  r.add_phone("1234567").unwrap();
  r.add_phone("+380501234567").unwrap();
  r.set_email(Some("ann@example.com")).unwrap();
  r.set_birthday(Some("1990-03-15")).unwrap();

  let data = r.to_data();
  let back = ContactRecord::from_data(&data).unwrap();
  assert_eq!(back.name().as_str(), "Ann");
  assert_eq!(back.phones().len(), 2);
  assert_eq!(back.email().unwrap().as_str(), "ann@example.com");
  assert!(back.address().is_none());
  assert_eq!(back.birthday().unwrap().to_string(), "1990-03-15");
}

#[test]
fn from_data_rejects_invalid_fields() {
  let data = ContactData {
    name:     "Ann".into(),
    phones:   vec!["123".into()],
    email:    None,
    address:  None,
    birthday: None,
  };
  assert!(ContactRecord::from_data(&data).is_err());
}

#[test]
fn contact_data_wire_shape() {
  let mut r = record("Ann");
  r.add_phone("1234567").unwrap();

  let json = serde_json::to_value(r.to_data()).unwrap();
  assert_eq!(
    json,
    serde_json::json!({
      "name": "Ann",
      "phones": ["1234567"],
      "email": null,
      "address": null,
      "birthday": null,
    })
  );
}

// ─── Note ────────────────────────────────────────────────────────────────────

#[test]
fn add_tags_normalises_and_drops_empty() {
  let mut note = Note::new("Plans", "");
  note.add_tags(["  Work ", "URGENT", "  ", "work"]);
  let tags: Vec<&str> = note.tags().collect();
  assert_eq!(tags, vec!["urgent", "work"]);
}

#[test]
fn remove_tag_normalises_before_lookup() {
  let mut note = Note::new("Plans", "");
  note.add_tags(["work"]);
  assert!(note.remove_tag("  WORK "));
  assert!(!note.remove_tag("work"));
}

#[test]
fn note_matches_title_content_and_tag_substring() {
  let mut note = Note::new("Meeting Notes", "Discuss the roadmap");
  note.add_tags(["planning"]);

  assert!(note.matches("meeting"));
  assert!(note.matches("ROADMAP"));
  assert!(note.matches("plan")); // substring of the tag, not an exact tag
  assert!(!note.matches("budget"));
}

#[test]
fn note_data_tags_are_sorted() {
  let mut note = Note::new("Plans", "x");
  note.add_tags(["zeta", "alpha", "mid"]);
  assert_eq!(note.to_data().tags, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn note_from_data_defaults_missing_content() {
  let data: crate::note::NoteData =
    serde_json::from_value(serde_json::json!({ "title": "Bare" })).unwrap();
  let note = Note::from_data(&data);
  assert_eq!(note.content, "");
  assert_eq!(note.tags().count(), 0);
}

// ─── Address book ────────────────────────────────────────────────────────────

#[test]
fn add_then_get_is_case_insensitive() {
  let mut book = AddressBook::new();
  book.add(record("John"));

  assert!(book.get("john").is_some());
  assert!(book.get("JOHN").is_some());
  assert_eq!(book.get("john").unwrap().name().as_str(), "John");
}

#[test]
fn add_same_name_different_case_overwrites() {
  let mut book = AddressBook::new();
  book.add(record("John"));

  let mut replacement = record("JOHN");
  replacement.add_phone("1234567").unwrap();
  book.add(replacement);

  assert_eq!(book.len(), 1);
  assert_eq!(book.get("john").unwrap().phones().len(), 1);
}

#[test]
fn remove_reports_existence() {
  let mut book = AddressBook::new();
  book.add(record("John"));
  assert!(book.remove("JOHN"));
  assert!(!book.remove("john"));
}

#[test]
fn search_filters_by_substring() {
  let mut book = AddressBook::new();
  book.add(record("John Smith"));
  book.add(record("Jane Doe"));

  let hits = book.search("smith");
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name().as_str(), "John Smith");
  assert!(book.search("xyz").is_empty());
}

#[test]
fn upcoming_birthdays_within_window() {
  let mut ann = record("Ann");
  ann.add_phone("5551234").unwrap();
  ann.set_birthday(Some("2024-12-25")).unwrap();
  let mut book = AddressBook::new();
  book.add(ann);

  let hits = book.upcoming_birthdays(10, date(2024, 12, 20));
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].days_to_birthday(date(2024, 12, 20)), Some(5));

  assert!(book.upcoming_birthdays(10, date(2024, 1, 1)).is_empty());
}

#[test]
fn book_data_round_trip_is_idempotent() {
  let mut book = AddressBook::new();
  let mut ann = record("Ann");
  ann.add_phone("1234567").unwrap();
  ann.set_email(Some("ann@example.com")).unwrap();
  book.add(ann);
  let mut bob = record("Bob");
  bob.set_birthday(Some("1990-03-15")).unwrap();
  book.add(bob);

  let restored = AddressBook::from_data(&book.to_data()).unwrap();
  assert_eq!(restored.len(), book.len());
  for original in book.iter() {
    let copy = restored.get(original.name().as_str()).unwrap();
    assert_eq!(copy.to_data().phones, original.to_data().phones);
    assert_eq!(copy.to_data().email, original.to_data().email);
    assert_eq!(copy.to_data().birthday, original.to_data().birthday);
  }
}

// ─── Notebook ────────────────────────────────────────────────────────────────

fn note(title: &str, tags: &[&str]) -> Note {
  let mut n = Note::new(title, "");
  n.add_tags(tags.iter().copied());
  n
}

#[test]
fn notebook_get_is_case_insensitive_and_overwrites() {
  let mut nb = Notebook::new();
  nb.add(Note::new("Plans", "v1"));
  nb.add(Note::new("PLANS", "v2"));

  assert_eq!(nb.len(), 1);
  assert_eq!(nb.get("plans").unwrap().content, "v2");
}

#[test]
fn search_by_tag_is_exact_and_title_sorted() {
  let mut nb = Notebook::new();
  nb.add(note("Zeta", &["work"]));
  nb.add(note("Alpha", &["work"]));
  nb.add(note("Workload", &["personal"])); // title contains "work"

  let hits = nb.search_by_tag(" WORK ");
  let titles: Vec<&str> = hits.iter().map(|n| n.title.as_str()).collect();
  assert_eq!(titles, vec!["Alpha", "Zeta"]);
}

#[test]
fn sorted_by_tags_places_untagged_first() {
  let mut nb = Notebook::new();
  nb.add(note("Tagged B", &["b"]));
  nb.add(note("Tagged A", &["a"]));
  nb.add(note("Bare", &[]));

  let titles: Vec<&str> =
    nb.sorted_by_tags().iter().map(|n| n.title.as_str()).collect();
  assert_eq!(titles, vec!["Bare", "Tagged A", "Tagged B"]);
}

#[test]
fn sorted_by_tags_breaks_ties_by_lowercased_title() {
  let mut nb = Notebook::new();
  nb.add(note("beta", &["x"]));
  nb.add(note("Alpha", &["x"]));

  let titles: Vec<&str> =
    nb.sorted_by_tags().iter().map(|n| n.title.as_str()).collect();
  assert_eq!(titles, vec!["Alpha", "beta"]);
}
