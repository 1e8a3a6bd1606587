//! Merging loud-frame timestamps into shouting ranges.

use crate::constants::{DEFAULT_GAP_THRESHOLD, DEFAULT_MIN_DURATION};
use crate::error::Result;
use crate::timestamp::{Timestamp, elapsed};
use serde::{Serialize, Serializer};
use std::fmt;

/// A closed run of loud timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoutRange {
    /// First timestamp of the run.
    pub start: Timestamp,
    /// Last timestamp of the run.
    pub end: Timestamp,
}

impl ShoutRange {
    /// Seconds from `start` to `end`.
    pub const fn duration_secs(&self) -> i64 {
        elapsed(self.start, self.end)
    }
}

impl fmt::Display for ShoutRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for ShoutRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parameters controlling how timestamps collapse into ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeParams {
    /// Largest gap in seconds between consecutive timestamps of one run.
    pub gap_threshold: u64,
    /// Shortest run duration in seconds that is reported.
    pub min_duration: u64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            min_duration: DEFAULT_MIN_DURATION,
        }
    }
}

/// Merge sorted timestamps into ranges.
///
/// Input must be sorted by elapsed seconds; nothing is re-sorted here. Each
/// timestamp is compared with the one before it, not with the start of the
/// run, so a long chain of small gaps becomes one range. Both the gap test
/// and the duration test are inclusive.
pub fn merge_ranges(timestamps: &[Timestamp], params: MergeParams) -> Vec<ShoutRange> {
    let gap_threshold = i64::try_from(params.gap_threshold).unwrap_or(i64::MAX);
    let min_duration = i64::try_from(params.min_duration).unwrap_or(i64::MAX);

    let Some((&first, rest)) = timestamps.split_first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut run = ShoutRange {
        start: first,
        end: first,
    };
    let mut prev = first;

    for &ts in rest {
        if elapsed(prev, ts) <= gap_threshold {
            run.end = ts;
        } else {
            push_if_long_enough(&mut ranges, run, min_duration);
            run = ShoutRange { start: ts, end: ts };
        }
        prev = ts;
    }

    push_if_long_enough(&mut ranges, run, min_duration);
    ranges
}

/// Parse and merge timestamp strings.
///
/// Every string is parsed before merging starts, so a malformed entry
/// anywhere fails the whole call.
pub fn merge_timestamp_strs<S: AsRef<str>>(
    timestamps: &[S],
    params: MergeParams,
) -> Result<Vec<ShoutRange>> {
    let parsed = timestamps
        .iter()
        .map(|ts| ts.as_ref().parse::<Timestamp>())
        .collect::<Result<Vec<_>>>()?;

    Ok(merge_ranges(&parsed, params))
}

fn push_if_long_enough(ranges: &mut Vec<ShoutRange>, run: ShoutRange, min_duration: i64) {
    if run.duration_secs() >= min_duration {
        ranges.push(run);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn params(gap_threshold: u64, min_duration: u64) -> MergeParams {
        MergeParams {
            gap_threshold,
            min_duration,
        }
    }

    fn rendered(ranges: &[ShoutRange]) -> Vec<String> {
        ranges.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_ranges(&[], params(5, 0)).is_empty());
        assert!(merge_ranges(&[], params(0, 10)).is_empty());
    }

    #[test]
    fn test_gap_equal_to_threshold_merges() {
        let ranges = merge_timestamp_strs(&["0:10", "0:15"], params(5, 0)).unwrap();
        assert_eq!(rendered(&ranges), ["0:10-0:15"]);
    }

    #[test]
    fn test_gap_above_threshold_splits() {
        let ranges = merge_timestamp_strs(&["0:10", "0:16"], params(5, 0)).unwrap();
        assert_eq!(rendered(&ranges), ["0:10-0:10", "0:16-0:16"]);
    }

    #[test]
    fn test_duration_equal_to_minimum_is_kept() {
        let ranges = merge_timestamp_strs(&["0:10", "0:13"], params(5, 3)).unwrap();
        assert_eq!(rendered(&ranges), ["0:10-0:13"]);
    }

    #[test]
    fn test_zero_gap_threshold_merges_duplicates_only() {
        let ranges = merge_timestamp_strs(&["0:01", "0:01", "0:02"], params(0, 0)).unwrap();
        assert_eq!(rendered(&ranges), ["0:01-0:01", "0:02-0:02"]);
    }

    #[test]
    fn test_default_params() {
        let defaults = MergeParams::default();
        assert_eq!(defaults.gap_threshold, 5);
        assert_eq!(defaults.min_duration, 3);
    }

    #[test]
    fn test_serializes_as_string() {
        let range = ShoutRange {
            start: Timestamp::from_secs(62),
            end: Timestamp::from_secs(65),
        };
        assert_eq!(serde_json::to_string(&range).unwrap(), "\"1:02-1:05\"");
    }
}
