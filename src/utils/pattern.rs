//! Escaping helpers for dynamically built regex patterns.

/// Escape configured characters for safe embedding inside a regex `[...]`
/// class. Characters that are significant inside a class (`\`, `[`, `]`,
/// `^`, `&`, `~`, and `-`) are backslash-escaped so a caller-supplied
/// hyphen is never misread as a range operator.
pub fn escape_char_class(chars: &[char]) -> String {
    let mut escaped = String::with_capacity(chars.len() * 2);
    for &c in chars {
        match c {
            '\\' | '[' | ']' | '^' | '&' | '~' | '-' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
