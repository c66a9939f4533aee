//! The command registry — longest-prefix dispatch over registered names.

use valet_core::store::Storage;

use crate::{context::AppContext, error::CommandResult, suggest};

/// What a handler hands back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
  pub message:     String,
  pub should_exit: bool,
}

impl CommandOutcome {
  pub fn message(message: impl Into<String>) -> Self {
    Self {
      message:     message.into(),
      should_exit: false,
    }
  }

  /// The terminal outcome; only the exit/quit handler produces it.
  pub fn exit(message: impl Into<String>) -> Self {
    Self {
      message:     message.into(),
      should_exit: true,
    }
  }
}

pub type Handler<S> = fn(&mut AppContext<S>, &str) -> CommandResult;

/// A registered command: its (lowercase, possibly multi-word) name, an
/// example usage line for the help text, and the handler to run.
pub struct Command<S: Storage> {
  pub name:  &'static str,
  pub usage: &'static str,
  pub run:   Handler<S>,
}

impl<S: Storage> Command<S> {
  pub fn new(
    name: &'static str,
    usage: &'static str,
    run: Handler<S>,
  ) -> Self {
    Self { name, usage, run }
  }
}

/// All registered commands, resolved per input line. Stateless between
/// calls: resolution never remembers anything from the previous line.
pub struct Registry<S: Storage> {
  commands: Vec<Command<S>>,
  /// Indices into `commands`, sorted by descending name length so the
  /// longest prefix wins; registration order breaks length ties.
  by_length: Vec<usize>,
}

impl<S: Storage> Registry<S> {
  pub fn new(commands: Vec<Command<S>>) -> Self {
    let mut by_length: Vec<usize> = (0..commands.len()).collect();
    by_length.sort_by_key(|&i| std::cmp::Reverse(commands[i].name.len()));
    Self {
      commands,
      by_length,
    }
  }

  /// Resolve an input line to a command and its argument string.
  ///
  /// Matching is done on a lowercased copy of the trimmed input, so command
  /// words are case-insensitive; the argument string keeps the original
  /// case. Returns `None` when no registered name is a prefix.
  pub fn resolve(&self, input: &str) -> Option<(&Command<S>, String)> {
    let normalized = input.trim();
    let lowered = normalized.to_lowercase();
    for &idx in &self.by_length {
      let command = &self.commands[idx];
      if !lowered.starts_with(command.name) {
        continue;
      }
      // Lowercasing preserves byte offsets for the ASCII prefix that just
      // matched; `get` guards the rare non-ASCII input anyway.
      let Some(rest) = normalized.get(command.name.len()..) else {
        continue;
      };
      return Some((command, rest.trim().to_string()));
    }
    None
  }

  /// Closest registered name to an unrecognised input, if any.
  pub fn suggest(&self, input: &str) -> Option<&'static str> {
    let names: Vec<&'static str> =
      self.commands.iter().map(|c| c.name).collect();
    suggest::suggest(input, &names)
  }

  /// One line per command, in registration order.
  pub fn help_text(&self) -> String {
    let mut lines = vec!["Commands:".to_string()];
    for command in &self.commands {
      lines.push(format!("- {}: {}", command.name, command.usage));
    }
    lines.join("\n")
  }
}
