//! Input validation primitives.
//!
//! Small helpers shared by the fallible utility modules, replacing verbose
//! ok_or_else + Error::validation_invalid_argument chains.

use crate::core::error::{Error, Result};

/// Require an Option to contain a value.
pub fn require<T>(opt: Option<T>, field: &str, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_invalid_argument(field, message, None, None))
}

/// Require a string to be non-empty after trimming.
/// Returns the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}

/// Require a slice to be non-empty.
pub fn require_non_empty_slice<'a, T>(
    slice: &'a [T],
    field: &str,
    message: &str,
) -> Result<&'a [T]> {
    if slice.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_unwraps_some() {
        assert_eq!(require(Some(7), "field", "msg").unwrap(), 7);
    }

    #[test]
    fn require_fails_on_none() {
        assert!(require::<i32>(None, "field", "Missing field").is_err());
    }

    #[test]
    fn require_non_empty_trims() {
        assert_eq!(
            require_non_empty("  hello  ", "field", "msg").unwrap(),
            "hello"
        );
    }

    #[test]
    fn require_non_empty_fails_on_whitespace() {
        assert!(require_non_empty("   ", "field", "Cannot be empty").is_err());
    }

    #[test]
    fn require_non_empty_slice_checks_len() {
        assert!(require_non_empty_slice(&[1], "field", "msg").is_ok());
        assert!(require_non_empty_slice::<i32>(&[], "field", "msg").is_err());
    }
}
