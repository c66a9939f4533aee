//! Argument tokenisation and key=value parsing.
//!
//! The grammar for every command is `<positional…> [key=value …]` with
//! shell-style quoting, so values may contain spaces
//! (`content="Discuss roadmap"`). Positional tokens are consumed by the
//! handler before the remainder goes through [`KeyValueArgs::parse`].

use crate::error::{CommandError, CommandResult};

/// Split an argument string with shell quoting rules.
pub fn split_args(arguments: &str) -> CommandResult<Vec<String>> {
  shlex::split(arguments).ok_or_else(|| {
    CommandError::BadArgument("unbalanced quotes in arguments".into())
  })
}

/// Parsed `key=value` pairs. Keys are lowercased and trimmed, values
/// trimmed; a repeated key keeps its first position but takes the last
/// value. Tokens without `=` are skipped.
#[derive(Debug, Default)]
pub struct KeyValueArgs {
  pairs: Vec<(String, String)>,
}

impl KeyValueArgs {
  pub fn parse(tokens: &[String]) -> Self {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for token in tokens {
      let Some((key, value)) = token.split_once('=') else {
        continue;
      };
      let key = key.trim().to_lowercase();
      let value = value.trim().to_string();
      match pairs.iter().position(|(k, _)| *k == key) {
        Some(idx) => pairs[idx].1 = value,
        None => pairs.push((key, value)),
      }
    }
    Self { pairs }
  }

  pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

  pub fn get(&self, key: &str) -> Option<&str> {
    self
      .pairs
      .iter()
      .find(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
  }

  /// Pairs in first-seen order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Values whose key starts with `prefix`, e.g. `phone`, `phone1`,
  /// `phone_home`.
  pub fn values_with_prefix<'a>(
    &'a self,
    prefix: &'a str,
  ) -> impl Iterator<Item = &'a str> {
    self
      .pairs
      .iter()
      .filter(move |(k, _)| k.starts_with(prefix))
      .map(|(_, v)| v.as_str())
  }
}
