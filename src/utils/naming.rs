//! Human-entered name validation and normalization.
//!
//! Unlike slugs, names preserve case and accept a caller-defined set of
//! special characters (space by default). The same structural rules apply:
//! alphanumeric boundaries and no adjacent special characters, including
//! mixed adjacency across different allowed characters.

use crate::utils::pattern::escape_char_class;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct NameOptions {
    /// The only non-alphanumeric characters permitted in a valid name.
    pub allowed_special_chars: Vec<char>,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            allowed_special_chars: vec![' '],
        }
    }
}

/// Check whether a candidate is a valid name under the given options.
///
/// Valid names are non-empty, start and end with an ASCII alphanumeric
/// character (either case), and contain only alphanumerics and allowed
/// special characters with no two specials adjacent. The allowed set is
/// escaped before being embedded in the matching pattern, so regex
/// metacharacters (including `-`) are taken literally.
pub fn is_valid_name(candidate: &str, options: &NameOptions) -> bool {
    if candidate.is_empty() {
        return false;
    }

    if options.allowed_special_chars.is_empty() {
        return candidate.chars().all(|c| c.is_ascii_alphanumeric());
    }

    let class = escape_char_class(&options.allowed_special_chars);
    let pattern = format!("^[a-zA-Z0-9]+(?:[{}][a-zA-Z0-9]+)*$", class);
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(candidate),
        Err(_) => false,
    }
}

/// Normalize a name to satisfy [`is_valid_name`].
///
/// Trims surrounding whitespace, deletes characters that are neither
/// alphanumeric nor allowed (deletion does not split a run of specials),
/// collapses each run of allowed specials to the first character of the
/// run, and drops leading/trailing specials. Case is preserved. Empty
/// input yields the empty string.
pub fn normalize_name(text: &str, options: &NameOptions) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut pending: Option<char> = None;

    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() {
            if let Some(sep) = pending.take() {
                out.push(sep);
            }
            out.push(ch);
        } else if options.allowed_special_chars.contains(&ch) {
            // First character of a run wins; later specials in the run drop.
            if !out.is_empty() && pending.is_none() {
                pending = Some(ch);
            }
        }
    }

    out
}
