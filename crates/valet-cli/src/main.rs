//! `valet` — a personal assistant for contacts and notes.
//!
//! # Usage
//!
//! ```
//! valet
//! valet --data-dir ~/.local/share/valet
//! ```
//!
//! A line-oriented shell: commands are multi-word names (`add contact`,
//! `search notes by tag`, …) followed by positional and `key=value`
//! arguments. State is flushed to two JSON files after every mutating
//! command.

mod args;
mod commands;
mod context;
mod error;
mod registry;
mod suggest;


use std::{
  io::{self, BufRead, Write},
  panic::{AssertUnwindSafe, catch_unwind},
  path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use directories::ProjectDirs;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use valet_core::store::Storage;
use valet_store_json::JsonStore;

use crate::{context::AppContext, registry::Registry};

const HELP_HEADER: &str = "Available commands:\n\
                           - help: show this message.\n\
                           - commands: list all commands with examples.";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "valet", about = "Personal assistant for contacts and notes")]
struct Cli {
  /// Directory holding contacts.json and notes.json.
  #[arg(long, env = "VALET_DATA_DIR", value_name = "DIR")]
  data_dir: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let data_dir = match cli.data_dir {
    Some(dir) => dir,
    None => default_data_dir()?,
  };
  tracing::debug!(path = %data_dir.display(), "opening store");

  let store = JsonStore::open(&data_dir)
    .with_context(|| format!("opening store in {}", data_dir.display()))?;
  let (book, notebook) = store.load().context("loading stored data")?;

  let mut app = AppContext::new(book, notebook, store);
  let registry = commands::build_registry();

  let stdin = io::stdin();
  run_shell(&mut app, &registry, &mut stdin.lock(), &mut io::stdout())
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
  let dirs = ProjectDirs::from("", "", "valet")
    .context("no home directory available for the default data dir")?;
  Ok(dirs.data_dir().to_path_buf())
}

// ─── Shell ────────────────────────────────────────────────────────────────────

/// The read-eval-print loop. Returns once the user exits or input ends;
/// end-of-input is a clean shutdown, not an error.
fn run_shell<S: Storage>(
  app: &mut AppContext<S>,
  registry: &Registry<S>,
  input: &mut impl BufRead,
  output: &mut impl Write,
) -> anyhow::Result<()> {
  writeln!(output, "Welcome to Valet!")?;
  writeln!(output, "Type 'help' to see available commands.")?;

  let mut line = String::new();
  loop {
    write!(output, "> ")?;
    output.flush()?;

    line.clear();
    if input.read_line(&mut line)? == 0 {
      writeln!(output)?;
      writeln!(output, "Goodbye!")?;
      return Ok(());
    }

    let user_input = line.trim();
    if user_input.is_empty() {
      continue;
    }

    let lowered = user_input.to_lowercase();
    if lowered == "help" || lowered == "h" {
      writeln!(output, "{HELP_HEADER}")?;
      writeln!(output, "{}", registry.help_text())?;
      continue;
    }
    if lowered == "commands" || lowered == "?" {
      writeln!(output, "{}", registry.help_text())?;
      continue;
    }

    let Some((command, arguments)) = registry.resolve(user_input) else {
      match registry.suggest(user_input) {
        Some(name) => {
          writeln!(output, "Unknown command. Did you mean '{name}'?")?;
        }
        None => {
          writeln!(
            output,
            "Unknown command. Type 'help' to list available commands."
          )?;
        }
      }
      continue;
    };

    // A handler panic must not kill the shell.
    let result =
      catch_unwind(AssertUnwindSafe(|| (command.run)(app, &arguments)));
    match result {
      Ok(Ok(outcome)) => {
        writeln!(output, "{}", outcome.message)?;
        if outcome.should_exit {
          return Ok(());
        }
      }
      Ok(Err(error)) => {
        writeln!(output, "Error: {error}")?;
      }
      Err(panic) => {
        tracing::error!(command = command.name, "handler panicked");
        writeln!(output, "Unexpected error: {}", panic_message(&panic))?;
      }
    }
  }
}

fn panic_message(panic: &Box<dyn std::any::Any + Send>) -> &str {
  if let Some(s) = panic.downcast_ref::<&str>() {
    s
  } else if let Some(s) = panic.downcast_ref::<String>() {
    s
  } else {
    "unknown panic"
  }
}
