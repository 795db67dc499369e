//! Timer arithmetic.
//!
//! Converts between requested durations and absolute instants, and turns a
//! deadline into the `MM:SS` countdown shown by `pomox status`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::state::TimerState;
use crate::error::ValidationError;

pub const MS_PER_MINUTE: u64 = 60_000;

/// Time left on an active timer. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub minutes: u64,
    /// Always in `0..=59`.
    pub seconds: u64,
}

impl RemainingTime {
    pub const ZERO: RemainingTime = RemainingTime {
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_remaining(*self))
    }
}

pub fn compute_end_time(now: DateTime<Utc>, duration_minutes: u32) -> DateTime<Utc> {
    now + Duration::minutes(i64::from(duration_minutes))
}

/// Round a millisecond span up to whole minutes.
///
/// # Errors
/// Returns a validation error for a zero span.
pub fn ms_to_minutes_ceil(ms: u64) -> Result<u64, ValidationError> {
    if ms == 0 {
        return Err(ValidationError::duration("must be greater than zero"));
    }
    Ok(ms.div_ceil(MS_PER_MINUTE))
}

/// Loose integer parse of a millisecond duration.
///
/// Leading whitespace and a sign are accepted, then the leading run of
/// digits is taken and anything after it is ignored (`"1000abc"` is 1000,
/// `"1.5"` is 1). Empty, non-numeric, zero and negative input is rejected.
///
/// # Errors
/// Returns a validation error describing why `raw` was rejected.
pub fn parse_duration_ms(raw: &str) -> Result<u64, ValidationError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(ValidationError::duration(format!("'{raw}' is not a number")));
    }

    let value: u64 = unsigned[..digits_len]
        .parse()
        .map_err(|_| ValidationError::duration(format!("'{raw}' is out of range")))?;

    if value == 0 {
        return Err(ValidationError::duration("must be greater than zero"));
    }
    if negative {
        return Err(ValidationError::duration("must not be negative"));
    }
    Ok(value)
}

/// Time left until `state.end_time`, or `None` when no timer is running.
pub fn remaining_time(state: &TimerState, now: DateTime<Utc>) -> Option<RemainingTime> {
    if !state.active {
        return None;
    }
    let end_time = state.end_time?;

    let diff_ms = end_time.signed_duration_since(now).num_milliseconds();
    if diff_ms <= 0 {
        return Some(RemainingTime::ZERO);
    }

    let total_seconds = (diff_ms / 1000) as u64;
    Some(RemainingTime {
        minutes: total_seconds / 60,
        seconds: total_seconds % 60,
    })
}

pub fn format_remaining(remaining: RemainingTime) -> String {
    format!("{:02}:{:02}", remaining.minutes, remaining.seconds)
}

/// `"1 minute"`, `"25 minutes"`; partial minutes round up.
pub fn format_duration(ms: u64) -> String {
    let minutes = ms.div_ceil(MS_PER_MINUTE);
    let plural = if minutes == 1 { "" } else { "s" };
    format!("{minutes} minute{plural}")
}
