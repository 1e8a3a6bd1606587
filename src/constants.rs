//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "audiopeaker";

/// Default RMS loudness threshold as a fraction of full scale.
pub const DEFAULT_LOUDNESS_THRESHOLD: f32 = 0.1;

/// Default minimum range duration in seconds when analyzing audio.
pub const DEFAULT_MIN_DURATION: u64 = 3;

/// Default minimum range duration for the raw `merge` subcommand.
///
/// Single loud points are kept so nothing the caller supplied disappears.
pub const DEFAULT_MERGE_MIN_DURATION: u64 = 0;

/// Default maximum gap in seconds between consecutive events of one run.
pub const DEFAULT_GAP_THRESHOLD: u64 = 5;

/// Output file name used when `--output` is given without a path.
pub const DEFAULT_OUTPUT_FILE: &str = "audio_peaks.json";

/// RMS framing parameters.
pub mod frames {
    /// Samples per analysis window.
    pub const FRAME_LENGTH: usize = 2048;
    /// Samples between consecutive window centres.
    pub const HOP_LENGTH: usize = 512;
}

/// Tolerance bounds (percent of full scale).
pub mod tolerance {
    /// Minimum valid tolerance.
    pub const MIN: f64 = 0.0;
    /// Maximum valid tolerance.
    pub const MAX: f64 = 100.0;
}

/// Loudness threshold bounds (fraction of full scale).
pub mod threshold {
    /// Minimum valid threshold.
    pub const MIN: f32 = 0.0;
    /// Maximum valid threshold.
    pub const MAX: f32 = 1.0;
}

/// Output file extensions by format.
pub mod output_extensions {
    /// JSON output extension.
    pub const JSON: &str = ".shouting.json";
    /// Audacity labels extension.
    pub const AUDACITY: &str = ".shouting.txt";
}

/// Label written for each range in Audacity label tracks.
pub const AUDACITY_LABEL: &str = "shouting";
