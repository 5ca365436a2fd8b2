//! Enum parsing with typed errors.

use crate::core::error::{Error, Result};
use std::str::FromStr;

/// Parse a string into any `FromStr` type, mapping failure to a
/// field-tagged validation error.
pub fn parse_enum<T: FromStr>(raw: &str, field: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        Error::validation_invalid_argument(
            field,
            "Not a recognized value",
            Some(raw.to_string()),
            None,
        )
    })
}

/// Like [`parse_enum`], but records the accepted variants in the error
/// details and as a hint.
pub fn parse_enum_with_variants<T: FromStr>(raw: &str, field: &str, variants: &[&str]) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        let allowed: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
        Error::validation_invalid_argument(
            field,
            "Not a recognized value",
            Some(raw.to_string()),
            Some(allowed),
        )
        .with_hint(format!("Valid values: {}", variants.join(", ")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorCode;
    use crate::utils::env::Environment;

    #[test]
    fn parses_known_variant() {
        let env: Environment = parse_enum("production", "environment").unwrap();
        assert_eq!(env, Environment::Production);
    }

    #[test]
    fn unknown_variant_is_validation_error() {
        let err = parse_enum::<Environment>("staging", "environment").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["value"], "staging");
    }

    #[test]
    fn variants_listed_in_details_and_hint() {
        let err = parse_enum_with_variants::<Environment>(
            "qa",
            "environment",
            &["development", "test", "production"],
        )
        .unwrap_err();
        assert_eq!(err.details["allowed"][0], "development");
        assert!(err.hints[0].message.contains("production"));
    }
}
