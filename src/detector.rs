//! Loud-event detection: audio in, merged shouting ranges out.

use crate::audio::{decode_audio_file, rms_frames};
use crate::constants::{DEFAULT_LOUDNESS_THRESHOLD, frames};
use crate::error::Result;
use crate::merge::{MergeParams, ShoutRange, merge_ranges};
use crate::timestamp::{Timestamp, to_timestamp};
use std::path::Path;
use tracing::{debug, info};

/// Settings for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisParams {
    /// RMS value a frame must exceed to count as loud (fraction of full scale).
    pub loudness_threshold: f32,
    /// How loud frames are merged into ranges.
    pub merge: MergeParams,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            loudness_threshold: DEFAULT_LOUDNESS_THRESHOLD,
            merge: MergeParams::default(),
        }
    }
}

/// Outcome of analysing one recording.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Merged shouting ranges in time order.
    pub ranges: Vec<ShoutRange>,
    /// Number of frames above the threshold.
    pub loud_frames: usize,
    /// Total number of RMS frames.
    pub total_frames: usize,
    /// Audio duration in seconds.
    pub duration_secs: f32,
}

impl AnalysisReport {
    /// Ranges rendered as `"M:SS-M:SS"`.
    pub fn rendered_ranges(&self) -> Vec<String> {
        self.ranges.iter().map(ToString::to_string).collect()
    }
}

/// Indices of frames whose loudness is strictly above `threshold`.
pub fn loud_frames(loudness: &[f32], threshold: f32) -> Vec<usize> {
    loudness
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value > threshold)
        .map(|(idx, _)| idx)
        .collect()
}

/// Convert frame indices to seconds from the start of the audio.
pub fn frames_to_seconds(frames: &[usize], sample_rate: u32, hop_length: usize) -> Vec<f64> {
    if sample_rate == 0 {
        return vec![0.0; frames.len()];
    }

    #[allow(clippy::cast_precision_loss)]
    let secs_per_frame = hop_length as f64 / f64::from(sample_rate);

    #[allow(clippy::cast_precision_loss)]
    frames
        .iter()
        .map(|&frame| frame as f64 * secs_per_frame)
        .collect()
}

/// Truncate times to timestamps, ordered by elapsed seconds.
///
/// The sort is stable and numeric, so `"10:05"` lands after `"2:05"`.
pub fn times_to_timestamps(times: &[f64]) -> Vec<Timestamp> {
    let mut timestamps: Vec<Timestamp> = times.iter().copied().map(to_timestamp).collect();
    timestamps.sort_by_key(|ts| ts.as_secs());
    timestamps
}

/// Analyze decoded mono samples.
pub fn analyze_samples(samples: &[f32], sample_rate: u32, params: &AnalysisParams) -> AnalysisReport {
    let loudness = rms_frames(samples, frames::FRAME_LENGTH, frames::HOP_LENGTH);
    let loud = loud_frames(&loudness, params.loudness_threshold);
    debug!(
        "{} of {} frames above loudness {:.3}",
        loud.len(),
        loudness.len(),
        params.loudness_threshold
    );

    let times = frames_to_seconds(&loud, sample_rate, frames::HOP_LENGTH);
    let timestamps = times_to_timestamps(&times);
    let ranges = merge_ranges(&timestamps, params.merge);

    #[allow(clippy::cast_precision_loss)]
    let duration_secs = if sample_rate == 0 {
        0.0
    } else {
        samples.len() as f32 / sample_rate as f32
    };

    AnalysisReport {
        ranges,
        loud_frames: loud.len(),
        total_frames: loudness.len(),
        duration_secs,
    }
}

/// Decode and analyze an audio file.
pub fn analyze_file(path: &Path, params: &AnalysisParams) -> Result<AnalysisReport> {
    let decoded = decode_audio_file(path)?;
    info!(
        "Decoded {:.1}s of audio at {} Hz",
        decoded.duration_secs, decoded.sample_rate
    );

    let report = analyze_samples(&decoded.samples, decoded.sample_rate, params);
    info!(
        "Found {} shouting range(s) in {}",
        report.ranges.len(),
        path.display()
    );
    Ok(report)
}
