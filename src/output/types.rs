//! Output type definitions.

use crate::merge::ShoutRange;
use serde::Serialize;

/// The JSON document written for one analysis: `{"shouting_ranges": [...]}`.
#[derive(Debug, Serialize)]
pub struct ShoutingDocument<'a> {
    /// Ranges rendered as `"M:SS-M:SS"` strings.
    pub shouting_ranges: &'a [ShoutRange],
}

impl<'a> ShoutingDocument<'a> {
    /// Wrap a slice of ranges.
    pub const fn new(shouting_ranges: &'a [ShoutRange]) -> Self {
        Self { shouting_ranges }
    }
}
