//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;
use std::fmt::Write;

/// Print the usage guide shown when no inputs are given.
pub fn print_smart_help(config: &Config) {
    print!("{}", guide_text(config));
}

/// Build the usage guide, showing the defaults currently in effect.
pub fn guide_text(config: &Config) -> String {
    let defaults = &config.defaults;
    let mut text = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(text, "Usage: audiopeaker [FILES]... [OPTIONS]");
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "Finds shouting segments by loudness and writes them as MM:SS ranges."
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "  -t, --tolerance <PERCENT>");
    let _ = writeln!(
        text,
        "      Loudness threshold as a percentage (current: {:.0}%).",
        f64::from(defaults.loudness_threshold) * 100.0
    );
    let _ = writeln!(text, "      Higher values ignore quieter parts.");
    let _ = writeln!(text);
    let _ = writeln!(text, "  -d, --min-duration <SECONDS>");
    let _ = writeln!(
        text,
        "      Shortest range to report (current: {}s). With 3 seconds:",
        defaults.min_duration
    );
    let _ = writeln!(text, "        1:02-1:04 is ignored, 1:07-1:18 is kept");
    let _ = writeln!(text);
    let _ = writeln!(text, "  -g, --gap <SECONDS>");
    let _ = writeln!(
        text,
        "      Longest quiet gap inside one range (current: {}s).",
        defaults.gap_threshold
    );
    let _ = writeln!(text, "        With 2 seconds: 1:02-1:04, 1:07-1:18");
    let _ = writeln!(text, "        With 5 seconds: 1:02-1:18");
    let _ = writeln!(text);
    let _ = writeln!(text, "Example: audiopeaker interview.mp3 -t 25 -d 4");
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "Run 'audiopeaker -h' for all options or 'audiopeaker merge -h' to merge raw timestamps."
    );
    text
}
