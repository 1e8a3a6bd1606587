//! Single file processing pipeline.

use crate::config::OutputFormat;
use crate::detector::{AnalysisParams, AnalysisReport, analyze_file};
use crate::error::{Error, Result};
use crate::output::{AudacityWriter, JsonRangeWriter, OutputWriter, write_all};
use crate::pipeline::output_path_for;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Where the result of a single analysis goes.
#[derive(Debug, Clone, Copy)]
pub enum OutputTarget<'a> {
    /// One file per format in this directory, named after the input.
    Directory {
        /// Output directory.
        dir: &'a Path,
        /// Formats to write.
        formats: &'a [OutputFormat],
    },
    /// A single JSON file at an explicit path.
    JsonFile(&'a Path),
    /// JSON printed to standard output.
    Stdout,
}

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    /// The analysis outcome.
    pub report: AnalysisReport,
    /// Processing duration in seconds.
    pub duration_secs: f64,
}

/// Analyze one audio file and write its shouting ranges.
pub fn process_file(
    input_path: &Path,
    target: OutputTarget<'_>,
    params: &AnalysisParams,
) -> Result<ProcessResult> {
    let start_time = Instant::now();

    info!("Processing: {}", input_path.display());
    let report = analyze_file(input_path, params)?;

    match target {
        OutputTarget::Directory { dir, formats } => {
            std::fs::create_dir_all(dir).map_err(|e| Error::OutputDirCreateFailed {
                path: dir.to_path_buf(),
                source: e,
            })?;
            for format in formats {
                let output_path = output_path_for(input_path, dir, *format);
                write_output(&output_path, *format, &report)?;
            }
        }
        OutputTarget::JsonFile(path) => write_output(path, OutputFormat::Json, &report)?,
        OutputTarget::Stdout => write_all(&mut JsonRangeWriter::stdout(), &report.ranges)?,
    }

    let duration_secs = start_time.elapsed().as_secs_f64();
    let realtime_factor = if duration_secs > 0.0 {
        f64::from(report.duration_secs) / duration_secs
    } else {
        0.0
    };
    info!(
        "Analyzed {:.1}s of audio in {:.2}s ({:.1}x realtime)",
        report.duration_secs, duration_secs, realtime_factor
    );

    Ok(ProcessResult {
        report,
        duration_secs,
    })
}

/// Write a report in one format to `output_path`.
pub fn write_output(output_path: &Path, format: OutputFormat, report: &AnalysisReport) -> Result<()> {
    debug!("Writing {} output: {}", format, output_path.display());

    let mut writer: Box<dyn OutputWriter> = match format {
        OutputFormat::Json => Box::new(JsonRangeWriter::new(output_path)?),
        OutputFormat::Audacity => Box::new(AudacityWriter::new(output_path)?),
    };

    write_all(writer.as_mut(), &report.ranges)
}
