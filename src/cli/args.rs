//! CLI argument definitions.

use crate::cli::validators::{parse_threshold, parse_tolerance};
use crate::config::OutputFormat;
use crate::constants::{DEFAULT_GAP_THRESHOLD, DEFAULT_MERGE_MIN_DURATION, DEFAULT_OUTPUT_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find shouting segments in audio recordings by loudness.
#[derive(Debug, Parser)]
#[command(name = "audiopeaker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input files or directories to analyze.
    pub inputs: Vec<PathBuf>,

    /// Common options for analysis.
    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Merge MM:SS timestamps into ranges without analysing audio.
    Merge(MergeArgs),
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the merge subcommand.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Timestamps such as 1:02 (read from stdin when omitted).
    pub timestamps: Vec<String>,

    /// Largest gap in seconds between consecutive timestamps of one range.
    #[arg(short, long, default_value_t = DEFAULT_GAP_THRESHOLD)]
    pub gap: u64,

    /// Shortest range duration in seconds to report.
    #[arg(short = 'd', long, default_value_t = DEFAULT_MERGE_MIN_DURATION)]
    pub min_duration: u64,
}

/// Arguments for the analyze command.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnalyzeArgs {
    /// Loudness threshold as a percentage of full scale (0-100).
    #[arg(short, long, value_parser = parse_tolerance, env = "AUDIOPEAKER_TOLERANCE",
          conflicts_with = "threshold")]
    pub tolerance: Option<f32>,

    /// Loudness threshold as a fraction of full scale (0.0-1.0).
    #[arg(long, value_parser = parse_threshold, env = "AUDIOPEAKER_THRESHOLD")]
    pub threshold: Option<f32>,

    /// Shortest range duration in seconds to report.
    #[arg(short = 'd', long, env = "AUDIOPEAKER_MIN_DURATION")]
    pub min_duration: Option<u64>,

    /// Largest gap in seconds between loud frames of one range.
    #[arg(short, long, env = "AUDIOPEAKER_GAP")]
    pub gap: Option<u64>,

    /// Output formats (comma-separated: json,audacity).
    #[arg(short, long, value_delimiter = ',', env = "AUDIOPEAKER_FORMAT")]
    pub format: Option<Vec<OutputFormat>>,

    /// Output directory (default: same as input).
    #[arg(short, long, env = "AUDIOPEAKER_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write the JSON result for a single input to this file (`--output=FILE`).
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_OUTPUT_FILE
    )]
    pub output: Option<PathBuf>,

    /// Print the JSON result for a single input to stdout.
    #[arg(long)]
    pub stdout: bool,

    /// Reprocess files even if output exists.
    #[arg(long)]
    pub force: bool,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_simple() {
        let cli = Cli::try_parse_from(["audiopeaker", "test.wav"]).unwrap();
        assert_eq!(cli.inputs.len(), 1);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "audiopeaker", "test.wav", "-t", "25", "-d", "4", "-g", "2", "-q",
        ])
        .unwrap();
        assert_eq!(cli.analyze.tolerance, Some(0.25));
        assert_eq!(cli.analyze.min_duration, Some(4));
        assert_eq!(cli.analyze.gap, Some(2));
        assert!(cli.analyze.quiet);
    }

    #[test]
    fn test_cli_rejects_tolerance_out_of_range() {
        assert!(Cli::try_parse_from(["audiopeaker", "test.wav", "-t", "101"]).is_err());
    }

    #[test]
    fn test_cli_tolerance_conflicts_with_threshold() {
        let cli = Cli::try_parse_from([
            "audiopeaker",
            "test.wav",
            "--tolerance",
            "10",
            "--threshold",
            "0.2",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_formats() {
        let cli =
            Cli::try_parse_from(["audiopeaker", "test.wav", "--format", "json,audacity"]).unwrap();
        assert_eq!(
            cli.analyze.format,
            Some(vec![OutputFormat::Json, OutputFormat::Audacity])
        );
    }

    #[test]
    fn test_cli_output_without_value_uses_default_name() {
        let cli = Cli::try_parse_from(["audiopeaker", "test.wav", "--output"]).unwrap();
        assert_eq!(cli.analyze.output, Some(PathBuf::from("audio_peaks.json")));

        let cli = Cli::try_parse_from(["audiopeaker", "test.wav", "--output=peaks.json"]).unwrap();
        assert_eq!(cli.analyze.output, Some(PathBuf::from("peaks.json")));
    }

    #[test]
    fn test_cli_output_before_input_does_not_consume_it() {
        let cli = Cli::try_parse_from(["audiopeaker", "--output", "recording.wav"]).unwrap();
        assert_eq!(cli.inputs, [PathBuf::from("recording.wav")]);
        assert_eq!(cli.analyze.output, Some(PathBuf::from("audio_peaks.json")));
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["audiopeaker", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_cli_parse_merge_subcommand() {
        let cli = Cli::try_parse_from(["audiopeaker", "merge", "1:00", "1:02", "-d", "3"]).unwrap();
        let Some(Command::Merge(args)) = cli.command else {
            panic!("expected merge subcommand");
        };
        assert_eq!(args.timestamps, ["1:00", "1:02"]);
        assert_eq!(args.gap, 5);
        assert_eq!(args.min_duration, 3);
    }

    #[test]
    fn test_cli_merge_defaults_keep_single_points() {
        let cli = Cli::try_parse_from(["audiopeaker", "merge"]).unwrap();
        let Some(Command::Merge(args)) = cli.command else {
            panic!("expected merge subcommand");
        };
        assert!(args.timestamps.is_empty());
        assert_eq!(args.min_duration, 0);
    }
}
