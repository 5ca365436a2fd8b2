//! Slug generation, validation, and collision resolution.
//!
//! Slugs are lowercase ASCII alphanumeric tokens joined by a single
//! separator character (hyphen by default). With `allow_dots` enabled the
//! dot becomes a second separator class, which makes the same machinery
//! usable for filename-shaped tokens like `report.2024.pdf`.

use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy)]
pub struct SlugOptions {
    /// Character used to join alphanumeric segments. Used verbatim.
    pub separator: char,
    /// Treat `.` as an additional separator class instead of stripping it.
    pub allow_dots: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: '-',
            allow_dots: false,
        }
    }
}

enum CharClass {
    Keep(char),
    Separator,
    Dot,
    Strip,
}

fn classify(ch: char, options: &SlugOptions) -> CharClass {
    match ch {
        'a'..='z' | '0'..='9' => CharClass::Keep(ch),
        '.' if options.allow_dots => CharClass::Dot,
        c if c == options.separator || c.is_whitespace() || c == '_' || c == '-' || c == '.' => {
            CharClass::Separator
        }
        _ => CharClass::Strip,
    }
}

/// Check whether a candidate is already a valid slug under the given options.
///
/// Valid slugs are non-empty, contain only lowercase ASCII letters, digits,
/// and separator-class characters, start and end with an alphanumeric
/// character, and never place two separator-class characters side by side.
/// Returns `false` for empty input; never panics.
pub fn is_valid_slug(candidate: &str, options: &SlugOptions) -> bool {
    let mut prev_was_separator = true; // rejects a leading separator
    let mut saw_any = false;

    for ch in candidate.chars() {
        let is_alnum = matches!(ch, 'a'..='z' | '0'..='9');
        let is_separator = ch == options.separator || (options.allow_dots && ch == '.');

        if !is_alnum && !is_separator {
            return false;
        }
        if is_separator && prev_was_separator {
            return false;
        }

        prev_was_separator = is_separator;
        saw_any = true;
    }

    saw_any && !prev_was_separator
}

/// Convert arbitrary text into a slug.
///
/// Lowercases, folds accented Latin letters to their ASCII base (NFD
/// decomposition, combining marks stripped), folds whitespace, underscores,
/// and hyphens into the separator, and strips everything else. Runs of
/// separator-class characters collapse to a single character; when dots are
/// allowed, a run containing at least one dot collapses to `.` regardless
/// of where the dot sits in the run. Leading and trailing separators are
/// trimmed. Empty input yields the empty string; the transform is
/// idempotent under fixed options.
pub fn convert_to_slug(text: &str, options: &SlugOptions) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut out = String::with_capacity(folded.len());
    let mut pending: Option<char> = None;

    for ch in folded.chars() {
        match classify(ch, options) {
            CharClass::Keep(c) => {
                if let Some(sep) = pending.take() {
                    out.push(sep);
                }
                out.push(c);
            }
            CharClass::Separator => {
                if !out.is_empty() && pending != Some('.') {
                    pending = Some(options.separator);
                }
            }
            CharClass::Dot => {
                if !out.is_empty() {
                    pending = Some('.');
                }
            }
            CharClass::Strip => {}
        }
    }

    // A pending separator at the end is trailing; drop it.
    out
}

/// Resolve a slug collision against a set of existing slugs.
///
/// Returns `base_slug` unchanged when it is not taken; otherwise appends
/// `separator + N` for the smallest `N >= 1` that produces an unused slug.
/// The existing set is read-only; persisting the result is the caller's
/// responsibility. `base_slug` is assumed slug-shaped and is not
/// re-validated.
pub fn generate_unique_slug(
    base_slug: &str,
    existing_slugs: &[String],
    options: &SlugOptions,
) -> String {
    let existing: HashSet<&str> = existing_slugs.iter().map(String::as_str).collect();

    if !existing.contains(base_slug) {
        return base_slug.to_string();
    }

    let mut n: u64 = 1;
    loop {
        let candidate = format!("{}{}{}", base_slug, options.separator, n);
        if !existing.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}
