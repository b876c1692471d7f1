// SPDX-License-Identifier: MIT

//! Shared helpers for timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as epoch milliseconds (the session sort-key unit).
pub fn now_epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
