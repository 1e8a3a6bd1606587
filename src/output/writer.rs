//! Output writer trait definition.

use crate::error::Result;
use crate::merge::ShoutRange;

/// Trait for writing merged shouting ranges.
pub trait OutputWriter {
    /// Write the file header (if applicable).
    fn write_header(&mut self) -> Result<()>;

    /// Write a single range.
    fn write_range(&mut self, range: &ShoutRange) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}

/// Write every range through `writer`, header to finalize.
pub fn write_all(writer: &mut dyn OutputWriter, ranges: &[ShoutRange]) -> Result<()> {
    writer.write_header()?;
    for range in ranges {
        writer.write_range(range)?;
    }
    writer.finalize()
}
