//! Audiopeaker - find shouting in audio recordings.
//!
//! The crate thresholds a frame-wise RMS loudness curve, turns the loud
//! frames into `M:SS` timestamps and merges nearby timestamps into ranges
//! such as `"1:07-1:18"`. The merge step is available on its own through
//! [`merge::merge_ranges`].

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod detector;
pub mod error;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod timestamp;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Command, MergeArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use detector::AnalysisParams;
use merge::MergeParams;
use output::{JsonRangeWriter, write_all};
use pipeline::{
    OutputTarget, ProcessCheck, collect_input_files, output_dir_for, process_file, should_process,
};
use std::io::Read;
use std::path::PathBuf;
use timestamp::Timestamp;
use tracing::{debug, error, info, warn};

pub use error::{Error, Result};

/// Main entry point for the audiopeaker CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // JSON on stdout must not be interleaved with log lines.
    let machine_stdout = cli.analyze.stdout || matches!(cli.command, Some(Command::Merge(_)));
    init_logging(cli.analyze.verbose, cli.analyze.quiet, machine_stdout);

    if let Err(e) = ctrlc::set_handler(|| {
        std::process::exit(130); // 128 + SIGINT(2)
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let config = load_default_config()?;

    if cli.inputs.is_empty() {
        cli::help::print_smart_help(&config);
        return Ok(());
    }

    analyze_files(&cli.inputs, &cli.analyze, &config)
}

/// Resolve analysis parameters: command line first, then configuration.
pub fn resolve_params(args: &AnalyzeArgs, config: &Config) -> AnalysisParams {
    AnalysisParams {
        loudness_threshold: args
            .tolerance
            .or(args.threshold)
            .unwrap_or(config.defaults.loudness_threshold),
        merge: MergeParams {
            gap_threshold: args.gap.unwrap_or(config.defaults.gap_threshold),
            min_duration: args.min_duration.unwrap_or(config.defaults.min_duration),
        },
    }
}

/// Reject option combinations that cannot be honoured.
pub fn validate_output_args(input_count: usize, args: &AnalyzeArgs) -> Result<()> {
    let invalid = |message: &str| {
        Err(Error::InvalidArguments {
            message: message.to_string(),
        })
    };

    if args.stdout {
        if input_count != 1 {
            return invalid("--stdout requires exactly one input file");
        }
        if args.output_dir.is_some() {
            return invalid("--stdout cannot be used with --output-dir");
        }
        if args.output.is_some() {
            return invalid("--stdout cannot be used with --output");
        }
        if args.format.is_some() {
            return invalid("--stdout cannot be used with --format");
        }
    }

    if args.output.is_some() {
        if input_count != 1 {
            return invalid("--output requires exactly one input file");
        }
        if args.output_dir.is_some() {
            return invalid("--output cannot be used with --output-dir");
        }
        if args.format.is_some() {
            return invalid("--output cannot be used with --format");
        }
    }

    Ok(())
}

/// Analyze input files with the given options.
fn analyze_files(inputs: &[PathBuf], args: &AnalyzeArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    validate_output_args(inputs.len(), args)?;

    let total_start = Instant::now();

    let files = collect_input_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoValidAudioFiles);
    }
    if files.len() > 1 {
        // A single directory argument can still expand to many files.
        validate_output_args(files.len(), args)?;
    }

    info!("Found {} audio file(s) to process", files.len());

    let params = resolve_params(args, config);
    info!(
        "Loudness threshold {:.3}, gap {}s, minimum duration {}s",
        params.loudness_threshold, params.merge.gap_threshold, params.merge.min_duration
    );

    let formats = args
        .format
        .clone()
        .unwrap_or_else(|| config.defaults.formats.clone());
    let output_dir = args.output_dir.clone();
    let fail_fast = args.fail_fast || files.len() == 1;

    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);

    let mut processed = 0;
    let mut skipped = 0;
    let mut errors = 0;
    let mut total_ranges = 0;

    for file in &files {
        let file_output_dir = output_dir_for(file, output_dir.as_deref());

        let target = if args.stdout {
            OutputTarget::Stdout
        } else if let Some(path) = args.output.as_deref() {
            OutputTarget::JsonFile(path)
        } else {
            if let ProcessCheck::SkipExists =
                should_process(file, &file_output_dir, &formats, args.force)
            {
                info!("Skipping (output exists): {}", file.display());
                skipped += 1;
                progress::inc_progress(file_progress.as_ref());
                continue;
            }
            OutputTarget::Directory {
                dir: &file_output_dir,
                formats: &formats,
            }
        };

        match process_file(file, target, &params) {
            Ok(result) => {
                processed += 1;
                total_ranges += result.report.ranges.len();
                for range in &result.report.ranges {
                    debug!("{}: {}", file.display(), range);
                }
            }
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                errors += 1;
                if fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} processed, {} skipped, {} errors, {} shouting range(s) in {:.2}s",
        processed, skipped, errors, total_ranges, total_duration
    );

    if errors > 0 {
        warn!("{} file(s) had errors", errors);
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool, to_stderr: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    if to_stderr {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
        Command::Merge(args) => handle_merge_command(&args),
    }
}

/// Merge timestamps given on the command line (or stdin) and print JSON.
fn handle_merge_command(args: &MergeArgs) -> Result<()> {
    let raw: Vec<String> = if args.timestamps.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        args.timestamps.clone()
    };

    let mut timestamps = raw
        .iter()
        .map(|ts| ts.parse::<Timestamp>())
        .collect::<Result<Vec<_>>>()?;
    timestamps.sort_by_key(|ts| ts.as_secs());
    debug!("Merging {} timestamp(s)", timestamps.len());

    let ranges = merge::merge_ranges(
        &timestamps,
        MergeParams {
            gap_threshold: args.gap,
            min_duration: args.min_duration,
        },
    );

    write_all(&mut JsonRangeWriter::stdout(), &ranges)
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{rendered}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
