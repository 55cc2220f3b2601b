//! Time and timestamp helpers.

use chrono::{DateTime, Duration, Utc};

/// UTC timestamp used for session creation and expiry.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Timestamp `minutes` after `from`.
#[must_use]
pub fn minutes_after(from: Timestamp, minutes: u32) -> Timestamp {
    from + Duration::minutes(i64::from(minutes))
}
