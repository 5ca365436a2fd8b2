//! Number clamping, parsing, and checked conversion.
//!
//! Unlike the text engines in `slug` and `naming`, these helpers report
//! invalid input as typed errors rather than degrading silently.

use crate::core::error::{Error, Result};
use crate::utils::validation;

/// Clamp a value into `[min, max]`. An inverted range is a validation
/// error rather than a silent swap.
pub fn clamp<T: PartialOrd + Copy>(value: T, min: T, max: T) -> Result<T> {
    if min > max {
        return Err(Error::validation_invalid_argument(
            "range",
            "Minimum must not exceed maximum",
            None,
            None,
        ));
    }

    if value < min {
        Ok(min)
    } else if value > max {
        Ok(max)
    } else {
        Ok(value)
    }
}

/// Parse a string as an integer, tagging failures with the field name.
pub fn parse_i64(raw: &str, field: &str) -> Result<i64> {
    let trimmed = validation::require_non_empty(raw, field, "Expected a number, got empty input")?;
    trimmed.parse::<i64>().map_err(|_| {
        Error::validation_invalid_argument(
            field,
            "Not a valid integer",
            Some(raw.to_string()),
            None,
        )
    })
}

/// Parse a string as a float, tagging failures with the field name.
pub fn parse_f64(raw: &str, field: &str) -> Result<f64> {
    let trimmed = validation::require_non_empty(raw, field, "Expected a number, got empty input")?;
    trimmed.parse::<f64>().map_err(|_| {
        Error::validation_invalid_argument(field, "Not a valid number", Some(raw.to_string()), None)
    })
}

/// Convert a float to an integer, truncating the fraction. NaN and values
/// outside the i64 range are errors.
pub fn f64_to_i64(value: f64, field: &str) -> Result<i64> {
    if value.is_nan() {
        return Err(Error::validation_invalid_argument(
            field,
            "NaN cannot be converted to an integer",
            None,
            None,
        ));
    }

    // i64::MAX is not exactly representable as f64; the cast boundary is
    // the next representable value, so compare against that.
    if value >= 9_223_372_036_854_775_808.0 || value < -9_223_372_036_854_775_808.0 {
        return Err(Error::validation_invalid_argument(
            field,
            "Value is out of integer range",
            Some(value.to_string()),
            None,
        ));
    }

    Ok(value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_bounds() {
        assert_eq!(clamp(5, 0, 10).unwrap(), 5);
        assert_eq!(clamp(-3, 0, 10).unwrap(), 0);
        assert_eq!(clamp(42, 0, 10).unwrap(), 10);
    }

    #[test]
    fn clamp_rejects_inverted_range() {
        assert!(clamp(5, 10, 0).is_err());
    }

    #[test]
    fn parse_i64_roundtrips() {
        assert_eq!(parse_i64("42", "count").unwrap(), 42);
        assert_eq!(parse_i64(" -7 ", "count").unwrap(), -7);
    }

    #[test]
    fn parse_i64_rejects_garbage_and_empty() {
        assert!(parse_i64("4x2", "count").is_err());
        assert!(parse_i64("", "count").is_err());
    }

    #[test]
    fn parse_f64_accepts_decimals() {
        assert_eq!(parse_f64("3.5", "ratio").unwrap(), 3.5);
    }

    #[test]
    fn f64_to_i64_truncates() {
        assert_eq!(f64_to_i64(3.9, "n").unwrap(), 3);
        assert_eq!(f64_to_i64(-3.9, "n").unwrap(), -3);
    }

    #[test]
    fn f64_to_i64_rejects_nan_and_overflow() {
        assert!(f64_to_i64(f64::NAN, "n").is_err());
        assert!(f64_to_i64(1e300, "n").is_err());
        assert!(f64_to_i64(-1e300, "n").is_err());
    }
}
