//! Command handlers and the registry wiring.

pub mod contacts;
pub mod notes;

use valet_core::store::Storage;

use crate::{
  context::AppContext,
  error::CommandResult,
  registry::{Command, CommandOutcome, Registry},
};

fn exit_command<S: Storage>(
  _: &mut AppContext<S>,
  _: &str,
) -> CommandResult {
  Ok(CommandOutcome::exit("Goodbye!"))
}

/// The full command surface, in registration order.
pub fn build_registry<S: Storage>() -> Registry<S> {
  Registry::new(vec![
    Command::new(
      "add contact",
      "add contact John phone=+123 email=john@example.com",
      contacts::add_contact,
    ),
    Command::new("list contacts", "List all contacts.", contacts::list_contacts),
    Command::new("show contact", "show contact John", contacts::show_contact),
    Command::new(
      "edit contact",
      "edit contact John phone=old:new email=new@example.com",
      contacts::edit_contact,
    ),
    Command::new("delete contact", "delete contact John", contacts::delete_contact),
    Command::new("search contacts", "search contacts John", contacts::search_contacts),
    Command::new(
      "upcoming birthdays",
      "upcoming birthdays 7",
      contacts::upcoming_birthdays,
    ),
    Command::new(
      "add note",
      "add note \"Meeting Notes\" content=\"Discuss roadmap\" tags=work,planning",
      notes::add_note,
    ),
    Command::new("list notes", "List all notes.", notes::list_notes),
    Command::new("show note", "show note \"Meeting Notes\"", notes::show_note),
    Command::new(
      "edit note",
      "edit note \"Meeting Notes\" content=\"Updated\" add_tags=urgent",
      notes::edit_note,
    ),
    Command::new("delete note", "delete note \"Meeting Notes\"", notes::delete_note),
    Command::new("search notes", "search notes roadmap", notes::search_notes),
    Command::new(
      "search notes by tag",
      "search notes by tag work",
      notes::search_notes_by_tag,
    ),
    Command::new("sort notes by tags", "sort notes by tags", notes::sort_notes_by_tags),
    Command::new("exit", "Exit the assistant.", exit_command),
    Command::new("quit", "Exit the assistant.", exit_command),
  ])
}
