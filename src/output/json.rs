//! JSON output format writer.

use crate::error::{Error, Result};
use crate::merge::ShoutRange;
use crate::output::{OutputWriter, ShoutingDocument};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writer for `{"shouting_ranges": [...]}` documents.
///
/// Ranges are collected and serialized in one go at [`finalize`](OutputWriter::finalize).
pub struct JsonRangeWriter<W: Write> {
    ranges: Vec<ShoutRange>,
    writer: W,
    /// Destination used in error messages (`-` for stdout).
    destination: PathBuf,
}

impl JsonRangeWriter<BufWriter<File>> {
    /// Create a writer for the file at `path`.
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::OutputCreate {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_writer(BufWriter::new(file), path))
    }
}

impl JsonRangeWriter<std::io::Stdout> {
    /// Create a writer that prints to standard output.
    pub fn stdout() -> Self {
        Self::from_writer(std::io::stdout(), Path::new("-"))
    }
}

impl<W: Write> JsonRangeWriter<W> {
    /// Wrap an arbitrary writer.
    pub fn from_writer(writer: W, destination: &Path) -> Self {
        Self {
            ranges: Vec::new(),
            writer,
            destination: destination.to_path_buf(),
        }
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for JsonRangeWriter<W> {
    fn write_header(&mut self) -> Result<()> {
        // No header for JSON - written at finalize
        Ok(())
    }

    fn write_range(&mut self, range: &ShoutRange) -> Result<()> {
        self.ranges.push(*range);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let document = ShoutingDocument::new(&self.ranges);
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut self.writer,
            PrettyFormatter::with_indent(b"    "),
        );
        document
            .serialize(&mut serializer)
            .map_err(|e| Error::JsonWrite {
                path: self.destination.clone(),
                source: e,
            })?;

        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
