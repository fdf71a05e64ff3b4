//! # Calendar-Day Arithmetic
//!
//! Signed calendar-day distance between Gregorian dates. This is the
//! single day-count primitive the workflow engine uses; discounting and
//! maturity math are built on top of it.
//!
//! ## Properties
//!
//! - `days_between(d, d) == 0`
//! - `days_between(a, b) == -days_between(b, a)`
//! - Leap years count: 2004-01-03 to 2005-01-03 is 366 days, while
//!   2009-01-03 to 2010-01-03 is 365.
//! - Time of day and zone offsets cannot influence the result: the
//!   inputs are plain calendar dates. Callers holding timestamps
//!   truncate through [`days_between_timestamps`].
//!
//! Reversed ranges are not an error; they yield negative counts and the
//! caller decides what a negative distance means.

use chrono::{DateTime, NaiveDate, Utc};

/// Signed number of calendar days from `start` to `end`.
///
/// Positive when `end` is after `start`, negative when before, zero when
/// equal.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Signed calendar-day distance between two UTC timestamps.
///
/// Both timestamps are truncated to their UTC calendar dates first, so
/// two instants on the same calendar day are zero days apart regardless
/// of the hours between them.
pub fn days_between_timestamps(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    days_between(start.date_naive(), end.date_naive())
}

// ─── Tests ───────────────────────────────────────────────────────────
