//! Contact command handlers.

use chrono::Local;
use valet_core::{record::ContactRecord, store::Storage};

use crate::{
  args::{KeyValueArgs, split_args},
  context::AppContext,
  error::{CommandError, CommandResult},
  registry::CommandOutcome,
};

/// The trimmed argument string as a contact name, or a usage error.
fn require_name(arguments: &str) -> CommandResult<&str> {
  let name = arguments.trim();
  if name.is_empty() {
    return Err(CommandError::usage("Name is required for this command."));
  }
  Ok(name)
}

pub fn add_contact<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  if arguments.is_empty() {
    return Err(CommandError::usage(
      "Usage: add contact <name> [phone=<number> ...] [email=<email>] \
       [address=<address>] [birthday=YYYY-MM-DD]",
    ));
  }

  let tokens = split_args(arguments)?;
  let Some((name, rest)) = tokens.split_first() else {
    return Err(CommandError::usage("Name is required for this command."));
  };
  let kv = KeyValueArgs::parse(rest);

  let mut record = ContactRecord::new(name)?;
  for phone in kv.values_with_prefix("phone") {
    record.add_phone(phone)?;
  }
  record.set_email(kv.get("email"))?;
  record.set_address(kv.get("address"))?;
  record.set_birthday(kv.get("birthday"))?;

  context.book.add(record);
  context.save()?;
  Ok(CommandOutcome::message(format!("Contact '{name}' added.")))
}

pub fn list_contacts<S: Storage>(
  context: &mut AppContext<S>,
  _: &str,
) -> CommandResult {
  if context.book.is_empty() {
    return Ok(CommandOutcome::message("No contacts stored yet."));
  }
  let mut lines = vec!["Contacts:".to_string()];
  for record in context.book.iter() {
    lines.push(format!("- {record}"));
  }
  Ok(CommandOutcome::message(lines.join("\n")))
}

pub fn show_contact<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let name = require_name(arguments)?;
  let record = context
    .book
    .get(name)
    .ok_or_else(|| CommandError::not_found("Contact", name))?;
  Ok(CommandOutcome::message(record.to_string()))
}

pub fn edit_contact<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let tokens = split_args(arguments)?;
  let Some((name, rest)) = tokens.split_first() else {
    return Err(CommandError::usage(
      "Usage: edit contact <name> field=<value>. Supported fields: phone, \
       email, address, birthday.",
    ));
  };

  let record = context
    .book
    .get_mut(name)
    .ok_or_else(|| CommandError::not_found("Contact", name))?;

  let updates = KeyValueArgs::parse(rest);
  if updates.is_empty() {
    return Err(CommandError::usage(
      "Provide fields to update, e.g. phone=+380..., email=foo@bar.",
    ));
  }

  let mut messages: Vec<String> = Vec::new();
  for (key, value) in updates.iter() {
    if key.starts_with("phone") {
      // `phone=old:new` edits in place; a bare `phone=N` appends.
      if let Some((old, new)) = value.split_once(':') {
        if record.edit_phone(old, new)? {
          messages.push(format!("Updated phone {old} -> {new}."));
        } else {
          messages.push(format!("Phone {old} not found."));
        }
      } else {
        record.add_phone(value)?;
        messages.push(format!("Added phone {value}."));
      }
    } else {
      match key {
        "email" => {
          record.set_email(Some(value))?;
          messages.push("Email updated.".to_string());
        }
        "address" => {
          record.set_address(Some(value))?;
          messages.push("Address updated.".to_string());
        }
        "birthday" => {
          record.set_birthday(Some(value))?;
          messages.push("Birthday updated.".to_string());
        }
        // Unknown keys are reported, not fatal.
        _ => messages.push(format!("Ignored unsupported field '{key}'.")),
      }
    }
  }

  context.save()?;
  Ok(CommandOutcome::message(messages.join("\n")))
}

pub fn delete_contact<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let name = require_name(arguments)?;
  if !context.book.remove(name) {
    return Err(CommandError::not_found("Contact", name));
  }
  context.save()?;
  Ok(CommandOutcome::message(format!("Contact '{name}' deleted.")))
}

pub fn search_contacts<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let query = arguments.trim();
  if query.is_empty() {
    return Err(CommandError::usage("Usage: search contacts <query>"));
  }
  let results = context.book.search(query);
  if results.is_empty() {
    return Ok(CommandOutcome::message("No matching contacts."));
  }
  let mut lines = vec!["Matches:".to_string()];
  for record in results {
    lines.push(format!("- {record}"));
  }
  Ok(CommandOutcome::message(lines.join("\n")))
}

pub fn upcoming_birthdays<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let days: i64 = arguments
    .trim()
    .parse()
    .map_err(|_| CommandError::usage("Usage: upcoming birthdays <days>"))?;

  let today = Local::now().date_naive();
  let results = context.book.upcoming_birthdays(days, today);
  if results.is_empty() {
    return Ok(CommandOutcome::message(
      "No upcoming birthdays in the selected range.",
    ));
  }
  let mut lines = vec![format!("Birthdays within {days} days:")];
  for record in results {
    let days_left = record.days_to_birthday(today).unwrap_or_default();
    lines.push(format!("- {}: in {days_left} day(s)", record.name()));
  }
  Ok(CommandOutcome::message(lines.join("\n")))
}
