//! Audacity labels output format writer.

use crate::constants::AUDACITY_LABEL;
use crate::error::{Error, Result};
use crate::merge::ShoutRange;
use crate::output::OutputWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Audacity label track writer, one `start\tend\tlabel` line per range.
pub struct AudacityWriter {
    writer: BufWriter<File>,
}

impl AudacityWriter {
    /// Create a new Audacity writer.
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::OutputCreate {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl OutputWriter for AudacityWriter {
    fn write_header(&mut self) -> Result<()> {
        // Audacity format has no header
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn write_range(&mut self, range: &ShoutRange) -> Result<()> {
        writeln!(
            self.writer,
            "{:.1}\t{:.1}\t{}",
            range.start.as_secs() as f64,
            range.end.as_secs() as f64,
            AUDACITY_LABEL,
        )?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
