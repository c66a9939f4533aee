//! Note command handlers.

use valet_core::{note::Note, store::Storage};

use crate::{
  args::{KeyValueArgs, split_args},
  context::AppContext,
  error::{CommandError, CommandResult},
  registry::CommandOutcome,
};

fn require_title(arguments: &str, usage: &str) -> CommandResult<String> {
  let tokens = split_args(arguments)?;
  match tokens.into_iter().next() {
    Some(title) => Ok(title),
    None => Err(CommandError::usage(usage)),
  }
}

fn tag_list(raw: &str) -> impl Iterator<Item = &str> {
  raw.split(',').map(str::trim)
}

pub fn add_note<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let tokens = split_args(arguments)?;
  let Some((title, rest)) = tokens.split_first() else {
    return Err(CommandError::usage(
      "Usage: add note <title> content=\"...\" [tags=tag1,tag2]",
    ));
  };
  let kv = KeyValueArgs::parse(rest);

  let mut note = Note::new(title.clone(), kv.get("content").unwrap_or(""));
  if let Some(tags) = kv.get("tags") {
    note.add_tags(tag_list(tags));
  }

  context.notebook.add(note);
  context.save()?;
  Ok(CommandOutcome::message(format!("Note '{title}' added.")))
}

pub fn list_notes<S: Storage>(
  context: &mut AppContext<S>,
  _: &str,
) -> CommandResult {
  if context.notebook.is_empty() {
    return Ok(CommandOutcome::message("No notes yet."));
  }
  let mut lines = vec!["Notes:".to_string()];
  for note in context.notebook.iter() {
    lines.push(format!("- {note}"));
  }
  Ok(CommandOutcome::message(lines.join("\n")))
}

pub fn show_note<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let title = require_title(arguments, "Usage: show note <title>")?;
  let note = context
    .notebook
    .get(&title)
    .ok_or_else(|| CommandError::not_found("Note", &title))?;
  Ok(CommandOutcome::message(format!("{note}\n{}", note.content)))
}

pub fn edit_note<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let tokens = split_args(arguments)?;
  let Some((title, rest)) = tokens.split_first() else {
    return Err(CommandError::usage(
      "Usage: edit note <title> [content=\"...\"] [add_tags=tag1,tag2] \
       [remove_tags=tag]",
    ));
  };

  let note = context
    .notebook
    .get_mut(title)
    .ok_or_else(|| CommandError::not_found("Note", title))?;

  let kv = KeyValueArgs::parse(rest);
  if let Some(content) = kv.get("content") {
    note.content = content.to_string();
  }
  if let Some(tags) = kv.get("add_tags") {
    note.add_tags(tag_list(tags));
  }
  if let Some(tags) = kv.get("remove_tags") {
    for tag in tag_list(tags) {
      note.remove_tag(tag);
    }
  }

  context.save()?;
  Ok(CommandOutcome::message(format!("Note '{title}' updated.")))
}

pub fn delete_note<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let title = require_title(arguments, "Usage: delete note <title>")?;
  if !context.notebook.remove(&title) {
    return Err(CommandError::not_found("Note", &title));
  }
  context.save()?;
  Ok(CommandOutcome::message(format!("Note '{title}' deleted.")))
}

pub fn search_notes<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let query = arguments.trim();
  if query.is_empty() {
    return Err(CommandError::usage("Usage: search notes <query>"));
  }
  let matches = context.notebook.search(query);
  if matches.is_empty() {
    return Ok(CommandOutcome::message("No notes match the query."));
  }
  let mut lines = vec!["Matching notes:".to_string()];
  for note in matches {
    lines.push(format!("- {note}"));
  }
  Ok(CommandOutcome::message(lines.join("\n")))
}

pub fn search_notes_by_tag<S: Storage>(
  context: &mut AppContext<S>,
  arguments: &str,
) -> CommandResult {
  let tag = arguments.trim();
  if tag.is_empty() {
    return Err(CommandError::usage("Usage: search notes by tag <tag>"));
  }
  let matches = context.notebook.search_by_tag(tag);
  if matches.is_empty() {
    return Ok(CommandOutcome::message(format!(
      "No notes found with tag '{tag}'."
    )));
  }
  let mut lines = vec![format!("Notes with tag '{tag}':")];
  for note in matches {
    lines.push(format!("- {}", note.title));
  }
  Ok(CommandOutcome::message(lines.join("\n")))
}

pub fn sort_notes_by_tags<S: Storage>(
  context: &mut AppContext<S>,
  _: &str,
) -> CommandResult {
  let notes = context.notebook.sorted_by_tags();
  if notes.is_empty() {
    return Ok(CommandOutcome::message("No notes to sort."));
  }
  let mut lines = vec!["Notes sorted by tags:".to_string()];
  for note in notes {
    let tags = note.tags().collect::<Vec<_>>().join(", ");
    lines.push(format!(
      "- [{}] {}",
      if tags.is_empty() { "-" } else { tags.as_str() },
      note.title
    ));
  }
  Ok(CommandOutcome::message(lines.join("\n")))
}
