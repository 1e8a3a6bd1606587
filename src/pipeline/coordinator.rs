//! Pipeline coordination for file processing.

use crate::config::OutputFormat;
use crate::constants::output_extensions;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Result of checking whether a file should be processed.
#[derive(Debug)]
pub enum ProcessCheck {
    /// File should be processed.
    Process,
    /// Skip - output already exists.
    SkipExists,
}

/// Determine the output directory for a file.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// Get output file path for a given format.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    // Use to_string_lossy() to handle non-UTF-8 filenames gracefully
    // Invalid UTF-8 sequences will be replaced with the Unicode replacement character
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );

    let extension = match format {
        OutputFormat::Json => output_extensions::JSON,
        OutputFormat::Audacity => output_extensions::AUDACITY,
    };

    output_dir.join(format!("{stem}{extension}"))
}

/// Check if a file should be processed.
///
/// A file is skipped when every requested output already exists, unless
/// `force` is set.
pub fn should_process(
    input: &Path,
    output_dir: &Path,
    formats: &[OutputFormat],
    force: bool,
) -> ProcessCheck {
    if !force {
        let all_exist = formats
            .iter()
            .all(|fmt| output_path_for(input, output_dir, *fmt).exists());
        if all_exist {
            return ProcessCheck::SkipExists;
        }
    }

    ProcessCheck::Process
}

/// Collect input files from paths (files and directories).
pub fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_audio_file(path) {
                files.push(path.clone());
            }
        } else if path.is_dir() {
            collect_audio_files_recursive(path, &mut files)?;
        } else {
            warn!("Skipping non-existent path: {}", path.display());
        }
    }

    Ok(files)
}

/// Recursively collect audio files from a directory.
fn collect_audio_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_audio_files_recursive(&path, files)?;
        } else if is_audio_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

/// Check if a file is a supported audio format.
fn is_audio_file(path: &Path) -> bool {
    use std::ffi::OsStr;

    path.extension().is_some_and(|ext| {
        // Compare extension directly as OsStr to handle non-UTF-8 filenames
        ext.eq_ignore_ascii_case(OsStr::new("wav"))
            || ext.eq_ignore_ascii_case(OsStr::new("flac"))
            || ext.eq_ignore_ascii_case(OsStr::new("mp3"))
            || ext.eq_ignore_ascii_case(OsStr::new("ogg"))
            || ext.eq_ignore_ascii_case(OsStr::new("m4a"))
            || ext.eq_ignore_ascii_case(OsStr::new("aac"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_for_with_explicit() {
        let input = Path::new("/data/audio.wav");
        let output = output_dir_for(input, Some(Path::new("/results")));
        assert_eq!(output, PathBuf::from("/results"));
    }

    #[test]
    fn test_output_dir_for_without_explicit() {
        let input = Path::new("/data/audio.wav");
        let output = output_dir_for(input, None);
        assert_eq!(output, PathBuf::from("/data"));
    }

    #[test]
    fn test_output_path_for_formats() {
        let json = output_path_for(
            Path::new("/data/interview.mp3"),
            Path::new("/output"),
            OutputFormat::Json,
        );
        assert_eq!(json, PathBuf::from("/output/interview.shouting.json"));

        let labels = output_path_for(
            Path::new("interview.mp3"),
            Path::new("/output"),
            OutputFormat::Audacity,
        );
        assert_eq!(labels, PathBuf::from("/output/interview.shouting.txt"));
    }

    #[test]
    fn test_should_process_skips_existing_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("clip.wav");
        let formats = [OutputFormat::Json];

        assert!(matches!(
            should_process(&input, dir.path(), &formats, false),
            ProcessCheck::Process
        ));

        std::fs::write(dir.path().join("clip.shouting.json"), "{}").unwrap();
        assert!(matches!(
            should_process(&input, dir.path(), &formats, false),
            ProcessCheck::SkipExists
        ));
        assert!(matches!(
            should_process(&input, dir.path(), &formats, true),
            ProcessCheck::Process
        ));
    }

    #[test]
    fn test_collect_input_files_recurses() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("day1");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("a.wav"), b"").unwrap();
        std::fs::write(nested.join("b.OGG"), b"").unwrap();
        std::fs::write(nested.join("notes.txt"), b"").unwrap();

        let mut files = collect_input_files(&[dir.path().to_path_buf()]).unwrap();
        files.sort();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| is_audio_file(f)));
    }

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file(Path::new("test.wav")));
        assert!(is_audio_file(Path::new("test.FLAC")));
        assert!(is_audio_file(Path::new("test.mp3")));
        assert!(is_audio_file(Path::new("test.ogg")));
        assert!(!is_audio_file(Path::new("test.txt")));
    }

    #[test]
    fn test_output_path_keeps_recording_name() {
        let input = Path::new("/recordings/Town Hall 2024-03-07 (part 2).m4a");
        assert!(is_audio_file(input));

        let path = output_path_for(input, Path::new("/out"), OutputFormat::Audacity);
        assert_eq!(
            path,
            PathBuf::from("/out/Town Hall 2024-03-07 (part 2).shouting.txt")
        );
    }
}
