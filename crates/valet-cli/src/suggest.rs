//! Approximate-match suggestions for unrecognised input.
//!
//! When no registered command name is a prefix of the input, we look for
//! the closest name by normalised Levenshtein similarity. Typos usually sit
//! in the command words at the front of the line, so if the full input
//! scores too low (arguments drag the similarity down), the input is
//! retried truncated to its first 1-4 words, longest truncation first.

const SIMILARITY_CUTOFF: f64 = 0.5;
const MAX_TRUNCATION_WORDS: usize = 4;

/// The closest command name to `input`, or `None` when nothing clears the
/// cutoff. `input` is matched lowercased; `names` are assumed lowercase.
pub fn suggest<'a>(input: &str, names: &[&'a str]) -> Option<&'a str> {
  let input = input.trim().to_lowercase();
  if input.is_empty() {
    return None;
  }

  if let Some(name) = best_match(&input, names) {
    return Some(name);
  }

  let words: Vec<&str> = input.split_whitespace().collect();
  if words.len() > 1 {
    for count in (1..=words.len().min(MAX_TRUNCATION_WORDS)).rev() {
      let partial = words[..count].join(" ");
      if let Some(name) = best_match(&partial, names) {
        return Some(name);
      }
    }
  }

  None
}

/// Top-1 name by similarity, first-registered wins on ties.
fn best_match<'a>(input: &str, names: &[&'a str]) -> Option<&'a str> {
  let mut best: Option<(&'a str, f64)> = None;
  for &name in names {
    let score = strsim::normalized_levenshtein(input, name);
    if score >= SIMILARITY_CUTOFF
      && best.is_none_or(|(_, best_score)| score > best_score)
    {
      best = Some((name, score));
    }
  }
  best.map(|(name, _)| name)
}
