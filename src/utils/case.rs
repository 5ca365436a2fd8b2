//! String case conversion and truncation.

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase, ToTitleCase};

pub fn to_snake_case(text: &str) -> String {
    text.to_snake_case()
}

pub fn to_kebab_case(text: &str) -> String {
    text.to_kebab_case()
}

pub fn to_camel_case(text: &str) -> String {
    text.to_lower_camel_case()
}

pub fn to_pascal_case(text: &str) -> String {
    text.to_pascal_case()
}

pub fn to_title_case(text: &str) -> String {
    text.to_title_case()
}

/// Truncate to at most `max_chars` characters, never splitting a UTF-8
/// code point. Counts characters, not bytes.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Truncate to `max_chars` characters total, appending a Unicode ellipsis
/// when anything was cut. The ellipsis counts toward the budget, so output
/// never exceeds `max_chars` characters.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_cases() {
        assert_eq!(to_snake_case("Hello World"), "hello_world");
        assert_eq!(to_kebab_case("Hello World"), "hello-world");
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_title_case("hello_world"), "Hello World");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("héllo", 3), "hél");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn ellipsis_stays_within_budget() {
        assert_eq!(truncate_with_ellipsis("hello world", 5), "hell…");
        assert_eq!(truncate_with_ellipsis("hi", 5), "hi");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }
}
