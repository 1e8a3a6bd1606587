//! `M:SS` timestamps.
//!
//! A [`Timestamp`] is a whole number of seconds since the start of the audio.
//! It renders as unpadded minutes followed by zero-padded seconds (`"2:05"`,
//! `"10:00"`). Sub-second precision is truncated, never rounded.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Whole seconds elapsed since audio start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    secs: u64,
}

impl Timestamp {
    /// Create a timestamp from whole seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    /// Total elapsed seconds.
    pub const fn as_secs(self) -> u64 {
        self.secs
    }

    /// Minutes component (unbounded).
    pub const fn minutes(self) -> u64 {
        self.secs / 60
    }

    /// Seconds component, always in `0..=59`.
    pub const fn seconds(self) -> u64 {
        self.secs % 60
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        to_seconds(s).map(Self::from_secs)
    }
}

/// Convert a time in seconds to a timestamp, truncating fractional seconds.
///
/// Negative and non-finite inputs map to `0:00`.
pub fn to_timestamp(seconds: f64) -> Timestamp {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Timestamp::default();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let secs = seconds.floor() as u64;
    Timestamp::from_secs(secs)
}

/// Parse `"minutes:seconds"` into total seconds.
///
/// The string must split on `:` into exactly two non-negative integers. The
/// seconds part is not range-checked, so `"1:75"` is 135 seconds.
pub fn to_seconds(ts: &str) -> Result<u64> {
    let invalid = || Error::InvalidTimestamp {
        value: ts.to_string(),
    };

    let mut parts = ts.split(':');
    let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let minutes: u64 = minutes.trim().parse().map_err(|_| invalid())?;
    let seconds: u64 = seconds.trim().parse().map_err(|_| invalid())?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Seconds from `a` to `b`. Negative when `b` is earlier than `a`.
///
/// Differences beyond the `i64` range saturate.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn elapsed(a: Timestamp, b: Timestamp) -> i64 {
    let diff = b.secs as i128 - a.secs as i128;
    if diff > i64::MAX as i128 {
        i64::MAX
    } else if diff < i64::MIN as i128 {
        i64::MIN
    } else {
        diff as i64
    }
}

/// Seconds between two timestamp strings.
pub fn elapsed_str(a: &str, b: &str) -> Result<i64> {
    Ok(elapsed(a.parse()?, b.parse()?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds("2:05").ok(), Some(125));
        assert_eq!(to_seconds("0:00").ok(), Some(0));
        assert_eq!(to_seconds("10:59").ok(), Some(659));
        assert_eq!(to_seconds("120:00").ok(), Some(7200));
    }

    #[test]
    fn test_to_seconds_unnormalized_seconds() {
        assert_eq!(to_seconds("1:75").ok(), Some(135));
    }

    #[test]
    fn test_to_seconds_rejects_malformed() {
        for bad in ["", "125", "1:2:3", "a:05", "1:xx", ":05", "1:", "-1:00", "1.5:00"] {
            let err = to_seconds(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidTimestamp { ref value } if value == bad),
                "expected InvalidTimestamp for {bad:?}"
            );
        }
    }

    #[test]
    fn test_to_seconds_overflow_is_format_error() {
        let huge = format!("{}:00", u64::MAX);
        assert!(to_seconds(&huge).is_err());
    }

    #[test]
    fn test_to_seconds_accepts_totals_past_i64() {
        let secs = to_seconds("153722867280912931:00").unwrap();
        assert!(secs > u64::try_from(i64::MAX).unwrap());
    }

    #[test]
    fn test_elapsed_saturates_for_huge_values() {
        let zero = Timestamp::from_secs(0);
        let far = Timestamp::from_secs(u64::MAX);
        assert_eq!(elapsed(zero, far), i64::MAX);
        assert_eq!(elapsed(far, zero), i64::MIN);
        assert_eq!(elapsed(far, far), 0);
    }

    #[test]
    fn test_to_timestamp_formats() {
        assert_eq!(to_timestamp(125.0).to_string(), "2:05");
        assert_eq!(to_timestamp(0.0).to_string(), "0:00");
        assert_eq!(to_timestamp(59.999).to_string(), "0:59");
        assert_eq!(to_timestamp(600.0).to_string(), "10:00");
        assert_eq!(to_timestamp(7325.4).to_string(), "122:05");
    }

    #[test]
    fn test_to_timestamp_truncates() {
        assert_eq!(to_timestamp(61.9).as_secs(), 61);
    }

    #[test]
    fn test_to_timestamp_clamps_invalid_input() {
        assert_eq!(to_timestamp(-3.0).as_secs(), 0);
        assert_eq!(to_timestamp(f64::NAN).as_secs(), 0);
        assert_eq!(to_timestamp(f64::INFINITY).as_secs(), 0);
    }

    #[test]
    fn test_round_trip_whole_seconds() {
        for secs in (0..4000).step_by(7) {
            #[allow(clippy::cast_precision_loss)]
            let rendered = to_timestamp(secs as f64).to_string();
            assert_eq!(to_seconds(&rendered).unwrap(), secs);
        }
    }

    #[test]
    fn test_elapsed() {
        let a = Timestamp::from_secs(60);
        let b = Timestamp::from_secs(62);
        assert_eq!(elapsed(a, b), 2);
        assert_eq!(elapsed(b, a), -2);
        assert_eq!(elapsed_str("1:02", "1:10").unwrap(), 8);
        assert!(elapsed_str("1:02", "oops").is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let early: Timestamp = "2:05".parse().unwrap();
        let late: Timestamp = "10:05".parse().unwrap();
        assert!(early < late);
        assert!("10:05" < "2:05");
    }
}
