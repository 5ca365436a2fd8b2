//! Blocking delay helpers.

use crate::core::error::{Error, Result};
use rand::Rng;
use std::thread;
use std::time::Duration;

pub fn sleep(duration: Duration) {
    thread::sleep(duration);
}

pub fn sleep_ms(millis: u64) {
    thread::sleep(Duration::from_millis(millis));
}

/// Sleep for a uniformly random duration in `[min, max]` and return the
/// duration actually slept. An inverted range is a validation error.
pub fn sleep_jitter(min: Duration, max: Duration) -> Result<Duration> {
    if min > max {
        return Err(Error::validation_invalid_argument(
            "range",
            "Minimum delay must not exceed maximum",
            None,
            None,
        ));
    }

    let millis = rand::rng().random_range(min.as_millis()..=max.as_millis());
    let chosen = Duration::from_millis(millis as u64);
    thread::sleep(chosen);
    Ok(chosen)
}
