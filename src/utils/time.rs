//! Time-unit conversion and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;

pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

pub fn mins(n: u64) -> Duration {
    Duration::from_secs(n.saturating_mul(SECONDS_PER_MINUTE))
}

pub fn hours(n: u64) -> Duration {
    Duration::from_secs(n.saturating_mul(SECONDS_PER_HOUR))
}

pub fn days(n: u64) -> Duration {
    Duration::from_secs(n.saturating_mul(SECONDS_PER_DAY))
}

/// Whole milliseconds in a duration, saturating at `u64::MAX`.
pub fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Current wall-clock time as Unix milliseconds.
pub fn now_unix_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// RFC 3339 timestamp with millisecond precision, always UTC (`Z` suffix).
pub fn format_rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds from now until `deadline`; zero when the deadline passed.
pub fn ms_until(deadline: DateTime<Utc>) -> u64 {
    let delta = deadline.timestamp_millis() - now_unix_ms();
    u64::try_from(delta).unwrap_or(0)
}
